use std::sync::{Arc, Mutex};

use mockall::mock;

use crate::domain::cart::events::{CartEvent, CartListener};
use crate::domain::logger::Logger;
use crate::domain::product::catalog::Catalog;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::shared::value_objects::ProductId;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub Listener {}

    impl CartListener for Listener {
        fn on_event(&self, event: &CartEvent);
    }
}

#[derive(Default)]
pub struct RecordingListener {
    pub events: Mutex<Vec<CartEvent>>,
}

impl RecordingListener {
    pub fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.to_string())
            .collect()
    }
}

impl CartListener for RecordingListener {
    fn on_event(&self, event: &CartEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn juice_catalog() -> Arc<Catalog> {
    let juices = [
        (1u64, "orange juice", 2.99),
        (2, "apple juice", 3.49),
        (3, "grape juice", 3.99),
    ];
    let products = juices
        .into_iter()
        .map(|(id, name, price)| {
            Product::new(NewProductProps {
                id: id.into(),
                name: name.to_string(),
                unit_price: price,
                image_ref: None,
            })
            .unwrap()
        })
        .collect();
    Arc::new(Catalog::new(products).unwrap())
}

pub fn id(n: u64) -> ProductId {
    ProductId::from(n)
}
