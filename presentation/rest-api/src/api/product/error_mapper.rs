use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::InvalidSlug => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_slug",
            ),
            ProductError::InvalidPrice => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_price",
            ),
            ProductError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            ProductError::CategoryNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "category.not_found")
            }
            ProductError::Repository(e) => {
                tracing::error!("Product repository failure: {}", e);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        }
    }
}
