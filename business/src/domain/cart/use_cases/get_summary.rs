use bigdecimal::BigDecimal;

use crate::domain::cart::session::CartSession;

pub struct GetCartSummaryParams<'a> {
    pub session: &'a dyn CartSession,
}

/// Item count and total taken straight from session state.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub count: u64,
    pub total_price: BigDecimal,
}

pub trait GetCartSummaryUseCase: Send + Sync {
    fn execute(&self, params: GetCartSummaryParams<'_>) -> CartSummary;
}
