use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use business::domain::shared::value_objects::SessionId;

pub const SESSION_HEADER: &str = "x-session-id";

/// Caller-chosen session key. Scopes the cart to one shopper.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "x-session-id",
    key_in = "header",
    checker = "session_key_checker"
)]
pub struct SessionKey(pub SessionId);

async fn session_key_checker(_req: &Request, api_key: ApiKey) -> Option<SessionId> {
    match SessionId::parse(&api_key.key) {
        Ok(session_id) => Some(session_id),
        Err(e) => {
            tracing::warn!("Rejected session key: {e}");
            None
        }
    }
}
