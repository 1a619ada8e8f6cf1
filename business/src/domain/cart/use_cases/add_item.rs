use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ItemChange};
use crate::domain::shared::value_objects::ProductId;

pub struct AddItemParams {
    pub product_id: ProductId,
    pub quantity: i64,
}

pub trait AddItemUseCase: Send + Sync {
    fn execute(&self, cart: &mut Cart, params: AddItemParams) -> Result<ItemChange, CartError>;
}
