use crate::domain::cart::model::Cart;
use crate::domain::cart::summary::CartSummary;
use crate::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;

pub struct GetCartSummaryUseCaseImpl;

impl GetCartSummaryUseCase for GetCartSummaryUseCaseImpl {
    fn execute(&self, cart: &Cart) -> CartSummary {
        CartSummary::from(cart)
    }
}
