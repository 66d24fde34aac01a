use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::session::load_or_default;
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct RemoveFromCartUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams<'_>) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart",
            params.product_id
        ));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let mut cart = load_or_default(params.session);
        if !cart.remove(product.id) {
            self.logger
                .debug(&format!("Product {} was not in the cart", product.id));
        }
        params.session.store(&cart);

        Ok(cart)
    }
}
