use async_trait::async_trait;

use crate::domain::category::model::Category;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetAllProductsParams {
    /// Restricts the listing to one category.
    pub category_slug: Option<String>,
}

/// Available products together with the category navigation.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    pub category: Option<Category>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductCatalog, ProductError>;
}
