use serde::Deserialize;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::shared::value_objects::ProductId;

/// On-disk shape of a catalog entry.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, alias = "image")]
    pub img: Option<String>,
}

impl ProductRecord {
    pub fn into_domain(self) -> Result<Product, ProductError> {
        Product::new(NewProductProps {
            id: self.id,
            name: self.name,
            unit_price: self.price,
            image_ref: self.img,
        })
    }
}
