use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_detail::GetCartDetailUseCaseImpl;
use business::application::cart::get_summary::GetCartSummaryUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_detail::GetProductDetailUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::session_config::SessionConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub admin_api: crate::api::admin::routes::AdminApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, session_config: &SessionConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // Catalog use cases
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_detail_use_case = Arc::new(GetProductDetailUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository,
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_detail_use_case = Arc::new(GetCartDetailUseCaseImpl {
            product_repository,
            logger: logger.clone(),
        });
        let get_cart_summary_use_case = Arc::new(GetCartSummaryUseCaseImpl);
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl { logger });

        let category_api =
            crate::api::category::routes::CategoryApi::new(get_all_categories_use_case);

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            get_product_detail_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            add_to_cart_use_case,
            remove_from_cart_use_case,
            get_cart_detail_use_case,
            get_cart_summary_use_case,
            clear_cart_use_case,
            session_config.cart_key.clone(),
        );

        let admin_api = crate::api::admin::routes::AdminApi::new(
            create_category_use_case,
            create_product_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        Self {
            health_api,
            category_api,
            product_api,
            cart_api,
            admin_api,
        }
    }
}
