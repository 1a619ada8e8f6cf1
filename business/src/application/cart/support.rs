use std::sync::Arc;

use chrono::Utc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::{CartEvent, CartListener};
use crate::domain::cart::model::ItemChange;
use crate::domain::logger::Logger;
use crate::domain::product::catalog::Catalog;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Fans one event out to every subscriber, in subscription order.
#[derive(Default)]
pub struct CartListeners {
    listeners: Vec<Arc<dyn CartListener>>,
}

impl CartListeners {
    pub fn new(listeners: Vec<Arc<dyn CartListener>>) -> Self {
        Self { listeners }
    }

    pub fn subscribe(&mut self, listener: Arc<dyn CartListener>) {
        self.listeners.push(listener);
    }
}

impl CartListener for CartListeners {
    fn on_event(&self, event: &CartEvent) {
        for listener in &self.listeners {
            listener.on_event(event);
        }
    }
}

pub(crate) fn resolve_product(
    catalog: &Catalog,
    id: &ProductId,
    logger: &dyn Logger,
) -> Result<Arc<Product>, CartError> {
    catalog.get(id).cloned().ok_or_else(|| {
        logger.warn(&format!("Unknown product id: {}", id));
        CartError::UnknownProduct(id.clone())
    })
}

/// Turns an effective change into an event; `Unchanged` publishes nothing.
pub(crate) fn publish_change(
    listener: &dyn CartListener,
    logger: &dyn Logger,
    id: &ProductId,
    change: ItemChange,
) {
    let occurred_at = Utc::now();
    let product_id = id.clone();
    let event = match change {
        ItemChange::Added { quantity } => CartEvent::ItemAdded {
            product_id,
            quantity,
            occurred_at,
        },
        ItemChange::Changed { previous, current } => CartEvent::QuantityChanged {
            product_id,
            previous,
            current,
            occurred_at,
        },
        ItemChange::Removed { previous } => CartEvent::ItemRemoved {
            product_id,
            previous,
            occurred_at,
        },
        ItemChange::Unchanged => return,
    };
    publish(listener, logger, event);
}

pub(crate) fn publish(listener: &dyn CartListener, logger: &dyn Logger, event: CartEvent) {
    logger.debug(&format!("Publishing cart event: {}", event));
    listener.on_event(&event);
}
