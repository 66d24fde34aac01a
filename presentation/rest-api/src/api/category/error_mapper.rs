use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CategoryError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.name_empty",
            ),
            CategoryError::InvalidSlug => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.invalid_slug",
            ),
            CategoryError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "category.not_found")
            }
            CategoryError::Repository(e) => {
                tracing::error!("Category repository failure: {}", e);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = CategoryError::NameEmpty.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "category.name_empty");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            CategoryError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
