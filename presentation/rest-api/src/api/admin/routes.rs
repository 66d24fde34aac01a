use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::category::dto::{CategoryResponse, CreateCategoryRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductResponse, UpdateProductRequest, parse_price,
};
use crate::api::security::AdminApiKey;
use crate::api::tags::ApiTags;

pub struct AdminApi {
    create_category_use_case: Arc<dyn CreateCategoryUseCase>,
    create_product_use_case: Arc<dyn CreateProductUseCase>,
    update_product_use_case: Arc<dyn UpdateProductUseCase>,
    delete_product_use_case: Arc<dyn DeleteProductUseCase>,
}

impl AdminApi {
    pub fn new(
        create_category_use_case: Arc<dyn CreateCategoryUseCase>,
        create_product_use_case: Arc<dyn CreateProductUseCase>,
        update_product_use_case: Arc<dyn UpdateProductUseCase>,
        delete_product_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_category_use_case,
            create_product_use_case,
            update_product_use_case,
            delete_product_use_case,
        }
    }
}

/// Catalog administration
///
/// Every endpoint requires the `X-API-Key` header.
#[OpenApi]
impl AdminApi {
    /// Create a category
    #[oai(path = "/admin/categories", method = "post", tag = "ApiTags::Admin")]
    async fn create_category(
        &self,
        _auth: AdminApiKey,
        body: Json<CreateCategoryRequest>,
    ) -> CreateCategoryResponse {
        let params = CreateCategoryParams {
            name: body.0.name,
            slug: body.0.slug,
        };

        match self.create_category_use_case.execute(params).await {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// The slug is derived from the name when omitted.
    #[oai(path = "/admin/products", method = "post", tag = "ApiTags::Admin")]
    async fn create_product(
        &self,
        _auth: AdminApiKey,
        body: Json<CreateProductRequest>,
    ) -> WriteProductResponse {
        let request = body.0;
        let Ok(category_id) = Uuid::parse_str(&request.category_id) else {
            return WriteProductResponse::BadRequest(ErrorResponse::validation(
                "category.invalid_id",
            ));
        };
        let Some(price) = parse_price(&request.price) else {
            return WriteProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_price",
            ));
        };

        let params = CreateProductParams {
            category_id,
            name: request.name,
            slug: request.slug,
            description: request.description,
            image: request.image,
            price,
            available: request.available,
        };

        match self.create_product_use_case.execute(params).await {
            Ok(product) => WriteProductResponse::Created(Json(product.into())),
            Err(err) => WriteProductResponse::from_error(err),
        }
    }

    /// Update a product
    ///
    /// Replaces every editable field. Cart lines keep the price they were
    /// added with.
    #[oai(path = "/admin/products/:id", method = "put", tag = "ApiTags::Admin")]
    async fn update_product(
        &self,
        _auth: AdminApiKey,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> WriteProductResponse {
        let request = body.0;
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return WriteProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_id",
            ));
        };
        let Ok(category_id) = Uuid::parse_str(&request.category_id) else {
            return WriteProductResponse::BadRequest(ErrorResponse::validation(
                "category.invalid_id",
            ));
        };
        let Some(price) = parse_price(&request.price) else {
            return WriteProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_price",
            ));
        };

        let params = UpdateProductParams {
            id: uuid,
            category_id,
            name: request.name,
            slug: request.slug,
            description: request.description,
            image: request.image,
            price,
            available: request.available,
        };

        match self.update_product_use_case.execute(params).await {
            Ok(product) => WriteProductResponse::Ok(Json(product.into())),
            Err(err) => WriteProductResponse::from_error(err),
        }
    }

    /// Delete a product
    #[oai(path = "/admin/products/:id", method = "delete", tag = "ApiTags::Admin")]
    async fn delete_product(&self, _auth: AdminApiKey, id: Path<String>) -> DeleteProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_id",
            ));
        };

        match self
            .delete_product_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum WriteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl WriteProductResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
