use std::sync::Arc;

use crate::application::cart::support::publish_change;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartListener;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::seed::{SeedCartParams, SeedCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::catalog::Catalog;

pub struct SeedCartUseCaseImpl {
    pub catalog: Arc<Catalog>,
    pub listener: Arc<dyn CartListener>,
    pub logger: Arc<dyn Logger>,
}

impl SeedCartUseCase for SeedCartUseCaseImpl {
    fn execute(&self, cart: &mut Cart, params: SeedCartParams) -> Result<usize, CartError> {
        let quantity = params.quantity;
        self.logger.info(&format!(
            "Seeding cart with {} product(s) x{}",
            self.catalog.len(),
            quantity
        ));

        // Staged on a copy so a failing product leaves the cart as it was.
        let mut staged = cart.clone();
        let mut changes = Vec::with_capacity(self.catalog.len());
        for product in self.catalog.products() {
            let change = staged.add_item(product, quantity).inspect_err(|e| {
                self.logger
                    .warn(&format!("Seeding aborted at {}: {}", product.id(), e));
            })?;
            changes.push((product.id().clone(), change));
        }
        *cart = staged;

        for (id, change) in &changes {
            publish_change(self.listener.as_ref(), self.logger.as_ref(), id, *change);
        }
        Ok(changes.len())
    }
}
