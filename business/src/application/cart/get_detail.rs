use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartDetail;
use crate::domain::cart::session::load_or_default;
use crate::domain::cart::use_cases::get_detail::{GetCartDetailParams, GetCartDetailUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetCartDetailUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartDetailUseCase for GetCartDetailUseCaseImpl {
    async fn execute(&self, params: GetCartDetailParams<'_>) -> Result<CartDetail, CartError> {
        let cart = load_or_default(params.session);
        if cart.is_empty() {
            return Ok(CartDetail::default());
        }

        let ids = cart.product_ids();
        let products = self.product_repository.get_by_ids(&ids).await?;

        if products.len() < ids.len() {
            self.logger.warn(&format!(
                "Cart references {} products missing from the catalog",
                ids.len() - products.len()
            ));
        }

        Ok(CartDetail::new(cart, products))
    }
}
