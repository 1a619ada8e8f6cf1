use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.duplicate_id")]
    DuplicateId(ProductId),
}
