use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart.non_positive_quantity")]
    NonPositiveQuantity(i64),
    #[error("cart.quantity_overflow")]
    QuantityOverflow,
    #[error("cart.unknown_product")]
    UnknownProduct(ProductId),
}
