use serde::{Deserialize, Serialize};

use super::model::{Cart, CartEntry};
use crate::domain::shared::value_objects::ProductId;

/// Read-only view of one cart entry, as handed to presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub image_ref: Option<String>,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Snapshot of the whole cart after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    pub total_price: f64,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

impl From<&CartEntry> for CartLine {
    fn from(entry: &CartEntry) -> Self {
        Self {
            product_id: entry.product_id().clone(),
            name: entry.name().to_string(),
            image_ref: entry.image_ref().map(str::to_string),
            unit_price: entry.unit_price(),
            quantity: entry.quantity(),
            line_total: entry.line_total(),
        }
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.entries().map(CartLine::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}
