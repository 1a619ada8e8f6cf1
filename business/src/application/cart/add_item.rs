use std::sync::Arc;

use crate::application::cart::support::{publish_change, resolve_product};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartListener;
use crate::domain::cart::model::{Cart, ItemChange};
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::catalog::Catalog;

pub struct AddItemUseCaseImpl {
    pub catalog: Arc<Catalog>,
    pub listener: Arc<dyn CartListener>,
    pub logger: Arc<dyn Logger>,
}

impl AddItemUseCase for AddItemUseCaseImpl {
    fn execute(&self, cart: &mut Cart, params: AddItemParams) -> Result<ItemChange, CartError> {
        let AddItemParams {
            product_id,
            quantity,
        } = params;
        self.logger
            .info(&format!("Adding {} x{}", product_id, quantity));

        let product = resolve_product(&self.catalog, &product_id, self.logger.as_ref())?;
        let change = cart.add_item(&product, quantity).inspect_err(|e| {
            self.logger.warn(&format!(
                "Rejected add of {} x{}: {}",
                product_id, quantity, e
            ));
        })?;

        publish_change(
            self.listener.as_ref(),
            self.logger.as_ref(),
            &product_id,
            change,
        );
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{
        MockListener, MockLog, RecordingListener, id, juice_catalog, mock_logger,
    };
    use crate::domain::cart::events::CartEvent;

    fn use_case(listener: Arc<dyn CartListener>) -> AddItemUseCaseImpl {
        AddItemUseCaseImpl {
            catalog: juice_catalog(),
            listener,
            logger: mock_logger(),
        }
    }

    fn params(n: u64, quantity: i64) -> AddItemParams {
        AddItemParams {
            product_id: id(n),
            quantity,
        }
    }

    #[test]
    fn should_add_known_product() {
        let use_case = use_case(Arc::new(RecordingListener::default()));
        let mut cart = Cart::new();

        let change = use_case.execute(&mut cart, params(2, 3)).unwrap();

        assert_eq!(change, ItemChange::Added { quantity: 3 });
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn should_accumulate_and_publish_quantity_change() {
        let mut listener = MockListener::new();
        listener
            .expect_on_event()
            .withf(|e| matches!(e, CartEvent::ItemAdded { quantity: 1, .. }))
            .times(1)
            .returning(|_| ());
        listener
            .expect_on_event()
            .withf(|e| {
                matches!(
                    e,
                    CartEvent::QuantityChanged {
                        previous: 1,
                        current: 3,
                        ..
                    }
                )
            })
            .times(1)
            .returning(|_| ());
        let use_case = use_case(Arc::new(listener));
        let mut cart = Cart::new();

        use_case.execute(&mut cart, params(1, 1)).unwrap();
        use_case.execute(&mut cart, params(1, 2)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn should_reject_unknown_product_id() {
        let recorder = Arc::new(RecordingListener::default());
        let use_case = use_case(recorder.clone());
        let mut cart = Cart::new();

        let result = use_case.execute(&mut cart, params(42, 1));

        assert_eq!(result, Err(CartError::UnknownProduct(id(42))));
        assert!(cart.is_empty());
        assert!(recorder.names().is_empty());
    }

    #[test]
    fn should_warn_when_quantity_not_positive() {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
            .expect_warn()
            .withf(|msg| msg.contains("cart.non_positive_quantity"))
            .times(1)
            .returning(|_| ());
        let use_case = AddItemUseCaseImpl {
            catalog: juice_catalog(),
            listener: Arc::new(RecordingListener::default()),
            logger: Arc::new(logger),
        };
        let mut cart = Cart::new();

        let result = use_case.execute(&mut cart, params(1, -1));

        assert_eq!(result, Err(CartError::NonPositiveQuantity(-1)));
        assert!(cart.is_empty());
    }
}
