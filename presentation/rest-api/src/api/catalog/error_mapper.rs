use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "catalog.product_not_found",
            ),
            CatalogError::IdEmpty | CatalogError::NameEmpty | CatalogError::NegativePrice => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "catalog.invalid_product",
            ),
            CatalogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
