use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub available: bool,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
