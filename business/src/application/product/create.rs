use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            category_id: params.category_id,
            name: params.name,
            slug: params.slug,
            description: params.description,
            image: params.image,
            price: params.price,
            available: params.available,
        })?;

        self.category_repository
            .get_by_id(product.category_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::Category;
    use crate::domain::shared::value_objects::Slug;
    use bigdecimal::BigDecimal;
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

    fn params(category_id: Uuid, name: &str, price: &str) -> CreateProductParams {
        CreateProductParams {
            category_id,
            name: name.to_string(),
            slug: None,
            description: "Stone-ground matcha".to_string(),
            image: None,
            price: BigDecimal::from_str(price).unwrap(),
            available: true,
        }
    }

    fn category_repo_with(category_id: Uuid) -> MockCategoryRepo {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id().returning(move |_| {
            Ok(Category::from_repository(
                category_id,
                "Green Tea".to_string(),
                Slug::parse("green-tea").unwrap(),
            ))
        });
        repo
    }

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let category_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(category_repo_with(category_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(category_id, "Ceremonial Matcha", "24.00"))
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.slug.as_str(), "ceremonial-matcha");
        assert_eq!(product.category_id, category_id);
    }

    #[tokio::test]
    async fn should_reject_when_category_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();
        let mut category_repo = MockCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), "Matcha", "24.00"))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }

    #[tokio::test]
    async fn should_reject_invalid_price_before_lookup() {
        let mut category_repo = MockCategoryRepo::new();
        category_repo.expect_get_by_id().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), "Matcha", "24.999"))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }
}
