use std::sync::Arc;

use crate::application::cart::support::{publish_change, resolve_product};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartListener;
use crate::domain::cart::model::{Cart, ItemChange};
use crate::domain::cart::use_cases::update_quantity::{
    QuantityAdjustment, UpdateQuantityParams, UpdateQuantityUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::catalog::Catalog;

pub struct UpdateQuantityUseCaseImpl {
    pub catalog: Arc<Catalog>,
    pub listener: Arc<dyn CartListener>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    fn execute(
        &self,
        cart: &mut Cart,
        params: UpdateQuantityParams,
    ) -> Result<ItemChange, CartError> {
        let id = params.product_id;
        let product = resolve_product(&self.catalog, &id, self.logger.as_ref())?;
        let current = cart.get(&id).map(|entry| i64::from(entry.quantity()));

        let target = match (params.adjustment, current) {
            (QuantityAdjustment::Set(quantity), _) => quantity,
            (QuantityAdjustment::Increment, Some(q)) => q + 1,
            (QuantityAdjustment::Decrement, Some(q)) => q - 1,
            (_, None) => {
                self.logger
                    .debug(&format!("Adjustment ignored, {} not in cart", id));
                return Ok(ItemChange::Unchanged);
            }
        };

        let change = cart
            .update_item_quantity(&product, target)
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Rejected quantity {} for {}: {}", target, id, e));
            })?;

        match change {
            ItemChange::Unchanged => self
                .logger
                .debug(&format!("Quantity of {} unchanged", id)),
            _ => self
                .logger
                .info(&format!("Set quantity of {} to {}", id, target)),
        }

        publish_change(self.listener.as_ref(), self.logger.as_ref(), &id, change);
        Ok(change)
    }
}
