use crate::domain::errors::CatalogError;

use super::model::Product;

/// Port for whatever supplies the product list at startup.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<Product>, CatalogError>;
}
