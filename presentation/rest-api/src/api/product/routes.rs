use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductCatalogResponse, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_detail_use_case,
        }
    }
}

/// Storefront catalog
#[OpenApi]
impl ProductApi {
    /// List available products
    ///
    /// Returns available products ordered by name together with all
    /// categories. `category` narrows the listing to one category slug.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_all_products(&self, category: Query<Option<String>>) -> GetAllProductsResponse {
        match self
            .get_all_use_case
            .execute(GetAllProductsParams {
                category_slug: category.0,
            })
            .await
        {
            Ok(catalog) => GetAllProductsResponse::Ok(Json(catalog.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetAllProductsResponse::NotFound(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get product detail
    ///
    /// Both the id and the slug must match. Products that are not on sale
    /// are still shown.
    #[oai(path = "/products/:id/:slug", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_detail(
        &self,
        id: Path<String>,
        slug: Path<String>,
    ) -> GetProductDetailResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductDetailResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_id",
            ));
        };

        match self
            .get_detail_use_case
            .execute(GetProductDetailParams {
                id: uuid,
                slug: slug.0,
            })
            .await
        {
            Ok(product) => GetProductDetailResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductDetailResponse::NotFound(json),
                    _ => GetProductDetailResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductCatalogResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductDetailResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
