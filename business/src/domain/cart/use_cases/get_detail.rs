use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartDetail;
use crate::domain::cart::session::CartSession;

pub struct GetCartDetailParams<'a> {
    pub session: &'a dyn CartSession,
}

#[async_trait]
pub trait GetCartDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetCartDetailParams<'_>) -> Result<CartDetail, CartError>;
}
