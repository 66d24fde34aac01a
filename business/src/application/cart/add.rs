use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::session::load_or_default;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddToCartUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams<'_>) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {} of product {} to cart (override: {})",
            params.quantity, params.product_id, params.override_quantity
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
        cart.add(&product, params.quantity, params.override_quantity);
        params.session.store(&cart);

        self.logger
            .info(&format!("Cart now holds {} items", cart.count()));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::session::CartSession;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::Slug;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
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
        pub Session {}

        impl CartSession for Session {
            fn load(&self) -> Option<Cart>;
            fn store(&self, cart: &Cart);
            fn purge(&self);
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

    fn product(id: Uuid, price: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            Uuid::new_v4(),
            "Jasmine Tea".to_string(),
            Slug::from_name("Jasmine Tea").unwrap(),
            String::new(),
            None,
            BigDecimal::from_str(price).unwrap(),
            true,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_add_product_to_empty_cart_and_store_it() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == product_id)
            .returning(move |id| Ok(product(id, "10.00")));

        let mut session = MockSession::new();
        session.expect_load().returning(|| None);
        session
            .expect_store()
            .withf(move |cart| {
                cart.count() == 2
                    && cart.total_price() == BigDecimal::from_str("20.00").unwrap()
            })
            .times(1)
            .returning(|_| ());

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                session: &session,
                product_id,
                quantity: 2,
                override_quantity: false,
            })
            .await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.line(product_id).unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn should_accumulate_onto_stored_line() {
        let product_id = Uuid::new_v4();
        let mut existing = Cart::new();
        existing.add(&product(product_id, "10.00"), 2, false);

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(product(id, "10.00")));

        let mut session = MockSession::new();
        session
            .expect_load()
            .returning(move || Some(existing.clone()));
        session.expect_store().times(1).returning(|_| ());

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                session: &session,
                product_id,
                quantity: 3,
                override_quantity: false,
            })
            .await
            .unwrap();

        assert_eq!(cart.line(product_id).unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn should_replace_quantity_when_overriding() {
        let product_id = Uuid::new_v4();
        let mut existing = Cart::new();
        existing.add(&product(product_id, "10.00"), 2, false);

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(product(id, "12.00")));

        let mut session = MockSession::new();
        session
            .expect_load()
            .returning(move || Some(existing.clone()));
        session.expect_store().times(1).returning(|_| ());

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                session: &session,
                product_id,
                quantity: 5,
                override_quantity: true,
            })
            .await
            .unwrap();

        let line = cart.line(product_id).unwrap();
        assert_eq!(line.quantity, 5);
        // Price snapshot from the first add is kept.
        assert_eq!(line.unit_price, BigDecimal::from_str("10.00").unwrap());
    }

    #[tokio::test]
    async fn should_not_touch_session_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let mut session = MockSession::new();
        session.expect_load().never();
        session.expect_store().never();

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                session: &session,
                product_id: Uuid::new_v4(),
                quantity: 1,
                override_quantity: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_propagate_database_errors() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let session = MockSession::new();

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                session: &session,
                product_id: Uuid::new_v4(),
                quantity: 1,
                override_quantity: false,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
