use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub category_id: Uuid,
    pub name: String,
    /// Derived from the name when absent.
    pub slug: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub available: bool,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
