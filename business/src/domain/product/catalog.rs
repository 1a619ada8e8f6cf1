use std::collections::HashMap;
use std::sync::Arc;

use super::errors::ProductError;
use super::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// The set of products available in a session, in load order.
///
/// Owns every [`Product`]; cart entries hold `Arc` handles into it.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting the first id that appears twice.
    pub fn new(products: Vec<Product>) -> Result<Self, ProductError> {
        let mut catalog = Self::default();
        for product in products {
            if catalog.index.contains_key(product.id()) {
                return Err(ProductError::DuplicateId(product.id().clone()));
            }
            catalog
                .index
                .insert(product.id().clone(), catalog.products.len());
            catalog.products.push(Arc::new(product));
        }
        Ok(catalog)
    }

    pub fn get(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    pub fn products(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
