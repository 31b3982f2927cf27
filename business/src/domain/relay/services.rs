use async_trait::async_trait;

use super::errors::RelayError;
use super::model::{RelayRequest, UpstreamResponse};

/// Service port for sending a relayed request to its target.
///
/// Implementations return [`RelayError::UpstreamFailed`] on any transport
/// failure. Non-2xx statuses are not failures.
#[async_trait]
pub trait RelayService: Send + Sync {
    async fn send(&self, request: RelayRequest) -> Result<UpstreamResponse, RelayError>;
}
