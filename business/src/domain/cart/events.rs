use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::ProductId;

/// Notification sent to subscribers after an effective cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ItemAdded {
        product_id: ProductId,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    QuantityChanged {
        product_id: ProductId,
        previous: u32,
        current: u32,
        occurred_at: DateTime<Utc>,
    },
    ItemRemoved {
        product_id: ProductId,
        previous: u32,
        occurred_at: DateTime<Utc>,
    },
    Cleared {
        removed_entries: usize,
        occurred_at: DateTime<Utc>,
    },
}

impl CartEvent {
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded { occurred_at, .. }
            | CartEvent::QuantityChanged { occurred_at, .. }
            | CartEvent::ItemRemoved { occurred_at, .. }
            | CartEvent::Cleared { occurred_at, .. } => *occurred_at,
        }
    }

    /// The product the event is about, if it concerns a single entry.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartEvent::ItemAdded { product_id, .. }
            | CartEvent::QuantityChanged { product_id, .. }
            | CartEvent::ItemRemoved { product_id, .. } => Some(product_id),
            CartEvent::Cleared { .. } => None,
        }
    }
}

impl std::fmt::Display for CartEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartEvent::ItemAdded { .. } => write!(f, "item_added"),
            CartEvent::QuantityChanged { .. } => write!(f, "quantity_changed"),
            CartEvent::ItemRemoved { .. } => write!(f, "item_removed"),
            CartEvent::Cleared { .. } => write!(f, "cleared"),
        }
    }
}

/// Subscriber port for cart change notifications.
pub trait CartListener: Send + Sync {
    fn on_event(&self, event: &CartEvent);
}
