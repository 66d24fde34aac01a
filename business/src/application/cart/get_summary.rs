use crate::domain::cart::session::load_or_default;
use crate::domain::cart::use_cases::get_summary::{
    CartSummary, GetCartSummaryParams, GetCartSummaryUseCase,
};

pub struct GetCartSummaryUseCaseImpl;

impl GetCartSummaryUseCase for GetCartSummaryUseCaseImpl {
    fn execute(&self, params: GetCartSummaryParams<'_>) -> CartSummary {
        let cart = load_or_default(params.session);
        CartSummary {
            count: cart.count(),
            total_price: cart.total_price(),
        }
    }
}
