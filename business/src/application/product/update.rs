use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::is_valid_price;
use crate::domain::shared::value_objects::Slug;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if !is_valid_price(&params.price) {
            return Err(ProductError::InvalidPrice);
        }

        let slug = Slug::resolve(params.slug, &params.name).ok_or(ProductError::InvalidSlug)?;

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if existing.category_id != params.category_id {
            self.category_repository
                .get_by_id(params.category_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => ProductError::CategoryNotFound,
                    other => ProductError::Repository(other),
                })?;
        }

        let updated_product = Product::from_repository(
            existing.id,
            params.category_id,
            params.name,
            slug,
            params.description,
            params.image,
            params.price,
            params.available,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated_product).await?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::Category;
    use bigdecimal::BigDecimal;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_id_and_slug(&self, id: Uuid, slug: &Slug) -> Result<Product, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
            async fn get_available(&self, category_id: Option<Uuid>) -> Result<Vec<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub CategoryRepo {}

        #[async_trait]
        impl CategoryRepository for CategoryRepo {
            async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
            async fn get_by_slug(&self, slug: &Slug) -> Result<Category, RepositoryError>;
            async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_product(id: Uuid, category_id: Uuid) -> Product {
        let created = Utc::now() - Duration::days(3);
        Product::from_repository(
            id,
            category_id,
            "Earl Grey".to_string(),
            Slug::parse("earl-grey").unwrap(),
            String::new(),
            None,
            BigDecimal::from_str("7.00").unwrap(),
            true,
            created,
            created,
        )
    }

    fn params(id: Uuid, category_id: Uuid, price: &str, available: bool) -> UpdateProductParams {
        UpdateProductParams {
            id,
            category_id,
            name: "Earl Grey Supreme".to_string(),
            slug: None,
            description: "Bergamot black tea".to_string(),
            image: None,
            price: BigDecimal::from_str(price).unwrap(),
            available,
        }
    }

    #[tokio::test]
    async fn should_update_price_and_availability() {
        let product_id = Uuid::new_v4();
        let category_id = Uuid::new_v4();
        let existing = stored_product(product_id, category_id);
        let created_at = existing.created_at;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        let mut category_repo = MockCategoryRepo::new();
        category_repo.expect_get_by_id().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params(product_id, category_id, "8.50", false))
            .await
            .unwrap();

        assert_eq!(product.price, BigDecimal::from_str("8.50").unwrap());
        assert!(!product.available);
        assert_eq!(product.slug.as_str(), "earl-grey-supreme");
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at > created_at);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), Uuid::new_v4(), "8.50", true))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_check_new_category_exists() {
        let product_id = Uuid::new_v4();
        let existing = stored_product(product_id, Uuid::new_v4());

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save().never();
        let mut category_repo = MockCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(product_id, Uuid::new_v4(), "8.50", true))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }

    #[tokio::test]
    async fn should_reject_invalid_price() {
        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), Uuid::new_v4(), "-1.00", true))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }
}
