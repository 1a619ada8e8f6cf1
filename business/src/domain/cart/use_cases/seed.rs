use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct SeedCartParams {
    pub quantity: i64,
}

pub trait SeedCartUseCase: Send + Sync {
    /// Adds every catalog product, all or nothing. Returns the number of
    /// products added.
    fn execute(&self, cart: &mut Cart, params: SeedCartParams) -> Result<usize, CartError>;
}
