use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{
    GetAllProductsParams, GetAllProductsUseCase, ProductCatalog,
};
use crate::domain::shared::value_objects::Slug;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductCatalog, ProductError> {
        self.logger.info(&format!(
            "Listing products for category: {}",
            params.category_slug.as_deref().unwrap_or("<all>")
        ));

        let category = match params.category_slug {
            Some(raw) => {
                // A malformed slug cannot name any category
                let slug = Slug::parse(raw).ok_or(ProductError::CategoryNotFound)?;
                let category = self
                    .category_repository
                    .get_by_slug(&slug)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::NotFound => ProductError::CategoryNotFound,
                        other => ProductError::Repository(other),
                    })?;
                Some(category)
            }
            None => None,
        };

        let categories = self.category_repository.get_all().await?;
        let products = self
            .repository
            .get_available(category.as_ref().map(|c| c.id))
            .await?;

        self.logger
            .info(&format!("Found {} available products", products.len()));

        Ok(ProductCatalog {
            category,
            categories,
            products,
        })
    }
}
