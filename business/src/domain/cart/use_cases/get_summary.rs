use crate::domain::cart::model::Cart;
use crate::domain::cart::summary::CartSummary;

pub trait GetCartSummaryUseCase: Send + Sync {
    fn execute(&self, cart: &Cart) -> CartSummary;
}
