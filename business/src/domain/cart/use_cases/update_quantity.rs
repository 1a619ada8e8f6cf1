use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ItemChange};
use crate::domain::shared::value_objects::ProductId;

/// How the quantity of an existing entry should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAdjustment {
    /// Absolute value; zero or below removes the entry.
    Set(i64),
    Increment,
    /// The last unit removes the entry.
    Decrement,
}

pub struct UpdateQuantityParams {
    pub product_id: ProductId,
    pub adjustment: QuantityAdjustment,
}

pub trait UpdateQuantityUseCase: Send + Sync {
    fn execute(
        &self,
        cart: &mut Cart,
        params: UpdateQuantityParams,
    ) -> Result<ItemChange, CartError>;
}
