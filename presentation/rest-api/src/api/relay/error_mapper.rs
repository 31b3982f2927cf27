use poem::http::StatusCode;
use poem::web::Json;
use poem::{IntoResponse, Response};
use serde::Serialize;

use business::domain::relay::errors::RelayError;

/// Body shape the storefront client expects from the proxy route.
#[derive(Debug, Serialize)]
pub struct RelayErrorBody {
    pub error: String,
}

pub trait IntoRelayErrorResponse {
    fn into_relay_error_response(self) -> Response;
}

impl IntoRelayErrorResponse for RelayError {
    fn into_relay_error_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::MissingUrl => (StatusCode::BAD_REQUEST, "Missing url parameter"),
            RelayError::InvalidUrl => (StatusCode::BAD_REQUEST, "Invalid url parameter"),
            RelayError::TargetNotAllowed => (StatusCode::FORBIDDEN, "Target host not allowed"),
            RelayError::UpstreamFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Proxy request failed")
            }
        };

        Json(RelayErrorBody {
            error: message.to_string(),
        })
        .with_status(status)
        .into_response()
    }
}
