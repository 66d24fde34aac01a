use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::session::CartSession;

pub struct RemoveFromCartParams<'a> {
    pub session: &'a dyn CartSession,
    pub product_id: Uuid,
}

#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromCartParams<'_>) -> Result<Cart, CartError>;
}
