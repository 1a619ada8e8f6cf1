use std::sync::Arc;

use crate::application::cart::support::{publish_change, resolve_product};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartListener;
use crate::domain::cart::model::{Cart, ItemChange};
use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::catalog::Catalog;

pub struct RemoveItemUseCaseImpl {
    pub catalog: Arc<Catalog>,
    pub listener: Arc<dyn CartListener>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    fn execute(
        &self,
        cart: &mut Cart,
        params: RemoveItemParams,
    ) -> Result<ItemChange, CartError> {
        let id = params.product_id;
        let product = resolve_product(&self.catalog, &id, self.logger.as_ref())?;

        let change = cart.remove_item(&product);
        if change == ItemChange::Unchanged {
            self.logger
                .debug(&format!("Remove ignored, {} not in cart", id));
        } else {
            self.logger.info(&format!("Removed {}", id));
        }

        publish_change(self.listener.as_ref(), self.logger.as_ref(), &id, change);
        Ok(change)
    }
}
