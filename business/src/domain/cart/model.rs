use std::sync::Arc;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// One product line in the cart. Quantity is always at least 1.
#[derive(Debug, Clone)]
pub struct CartEntry {
    product: Arc<Product>,
    quantity: u32,
}

impl CartEntry {
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn product_id(&self) -> &ProductId {
        self.product.id()
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn image_ref(&self) -> Option<&str> {
        self.product.image_ref()
    }

    pub fn unit_price(&self) -> f64 {
        self.product.unit_price()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> f64 {
        self.product.unit_price() * f64::from(self.quantity)
    }
}

/// What a single mutation did to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemChange {
    Added { quantity: u32 },
    Changed { previous: u32, current: u32 },
    Removed { previous: u32 },
    Unchanged,
}

/// Ordered, id-unique list of cart entries.
///
/// Entries keep insertion order. A product that is removed and added again
/// goes to the end.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`, merging into an existing entry.
    ///
    /// Non-positive quantities are rejected and leave the cart untouched.
    pub fn add_item(
        &mut self,
        product: &Arc<Product>,
        quantity: i64,
    ) -> Result<ItemChange, CartError> {
        if quantity <= 0 {
            return Err(CartError::NonPositiveQuantity(quantity));
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::QuantityOverflow)?;

        match self.position(product.id()) {
            Some(i) => {
                let entry = &mut self.entries[i];
                let previous = entry.quantity;
                entry.quantity = previous
                    .checked_add(quantity)
                    .ok_or(CartError::QuantityOverflow)?;
                Ok(ItemChange::Changed {
                    previous,
                    current: entry.quantity,
                })
            }
            None => {
                self.entries.push(CartEntry {
                    product: Arc::clone(product),
                    quantity,
                });
                Ok(ItemChange::Added { quantity })
            }
        }
    }

    /// Drops the entry for `product`. Absent products are a no-op.
    pub fn remove_item(&mut self, product: &Product) -> ItemChange {
        match self.position(product.id()) {
            Some(i) => {
                let entry = self.entries.remove(i);
                ItemChange::Removed {
                    previous: entry.quantity,
                }
            }
            None => ItemChange::Unchanged,
        }
    }

    /// Empties the cart and returns how many entries were dropped.
    pub fn remove_all_items(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Sets the quantity of an existing entry; `new_quantity <= 0` removes it.
    /// Products not in the cart are left alone.
    pub fn update_item_quantity(
        &mut self,
        product: &Product,
        new_quantity: i64,
    ) -> Result<ItemChange, CartError> {
        let Some(i) = self.position(product.id()) else {
            return Ok(ItemChange::Unchanged);
        };

        if new_quantity <= 0 {
            let entry = self.entries.remove(i);
            return Ok(ItemChange::Removed {
                previous: entry.quantity,
            });
        }

        let current = u32::try_from(new_quantity).map_err(|_| CartError::QuantityOverflow)?;
        let entry = &mut self.entries[i];
        let previous = entry.quantity;
        if previous == current {
            return Ok(ItemChange::Unchanged);
        }
        entry.quantity = current;
        Ok(ItemChange::Changed { previous, current })
    }

    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of line totals in insertion order, unrounded.
    pub fn total_price(&self) -> f64 {
        // Fold from +0.0 so an empty cart never reports -0.0.
        self.entries
            .iter()
            .fold(0.0, |total, entry| total + entry.line_total())
    }

    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.entries.iter().position(|e| e.product_id() == id)
    }
}
