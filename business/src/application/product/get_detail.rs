use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use crate::domain::shared::value_objects::Slug;

pub struct GetProductDetailUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(&self, params: GetProductDetailParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Getting product detail: {}/{}",
            params.id, params.slug
        ));

        let slug = Slug::parse(params.slug).ok_or(ProductError::NotFound)?;

        self.repository
            .get_by_id_and_slug(params.id, &slug)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })
    }
}
