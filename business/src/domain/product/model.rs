use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

/// Immutable catalog entry. Built once at catalog load and shared by reference
/// with every cart entry that points at it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: f64,
    image_ref: Option<String>,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub image_ref: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if !props.unit_price.is_finite() || props.unit_price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            unit_price: props.unit_price,
            image_ref: props.image_ref.filter(|img| !img.trim().is_empty()),
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }
}
