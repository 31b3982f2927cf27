use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CheckoutError::PaymentMethodMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.payment_method_missing",
            ),
            CheckoutError::RequiredFieldMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.required_field_missing",
            ),
            CheckoutError::UnknownPaymentMethod => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.unknown_payment_method",
            ),
            CheckoutError::PaymentFailed => (
                StatusCode::PAYMENT_REQUIRED,
                "PaymentFailed",
                "checkout.payment_failed",
            ),
            CheckoutError::Repository(_) => (
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
