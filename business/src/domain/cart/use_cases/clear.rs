use crate::domain::cart::model::Cart;

pub trait ClearCartUseCase: Send + Sync {
    /// Returns how many entries were dropped.
    fn execute(&self, cart: &mut Cart) -> usize;
}
