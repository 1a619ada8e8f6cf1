use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ItemChange};
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveItemParams {
    pub product_id: ProductId,
}

pub trait RemoveItemUseCase: Send + Sync {
    fn execute(&self, cart: &mut Cart, params: RemoveItemParams)
    -> Result<ItemChange, CartError>;
}
