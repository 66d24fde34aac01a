use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductDetailParams {
    pub id: Uuid,
    pub slug: String,
}

#[async_trait]
pub trait GetProductDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetProductDetailParams) -> Result<Product, ProductError>;
}
