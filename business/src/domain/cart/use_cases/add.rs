use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::session::CartSession;

pub struct AddToCartParams<'a> {
    pub session: &'a dyn CartSession,
    pub product_id: Uuid,
    pub quantity: u32,
    /// Replace the line quantity instead of adding to it.
    pub override_quantity: bool,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams<'_>) -> Result<Cart, CartError>;
}
