use std::sync::Arc;

use chrono::Utc;

use crate::application::cart::support::publish;
use crate::domain::cart::events::{CartEvent, CartListener};
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub listener: Arc<dyn CartListener>,
    pub logger: Arc<dyn Logger>,
}

impl ClearCartUseCase for ClearCartUseCaseImpl {
    fn execute(&self, cart: &mut Cart) -> usize {
        self.logger.info("Clearing cart");

        let removed = cart.remove_all_items();
        if removed > 0 {
            publish(
                self.listener.as_ref(),
                self.logger.as_ref(),
                CartEvent::Cleared {
                    removed_entries: removed,
                    occurred_at: Utc::now(),
                },
            );
        }

        self.logger
            .info(&format!("Cleared cart, {} entries removed", removed));
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{RecordingListener, juice_catalog, mock_logger};

    #[test]
    fn should_empty_cart_and_publish_once() {
        let recorder = Arc::new(RecordingListener::default());
        let use_case = ClearCartUseCaseImpl {
            listener: recorder.clone(),
            logger: mock_logger(),
        };
        let mut cart = Cart::new();
        for product in juice_catalog().products() {
            cart.add_item(product, 2).unwrap();
        }

        assert_eq!(use_case.execute(&mut cart), 3);
        assert_eq!(use_case.execute(&mut cart), 0);

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
        assert_eq!(recorder.names(), vec!["cleared"]);
        let events = recorder.events.lock().unwrap();
        assert_eq!(events[0].product_id(), None);
    }
}
