use async_trait::async_trait;

use crate::domain::relay::errors::RelayError;
use crate::domain::relay::model::RelayResponse;

pub struct ForwardRequestParams {
    /// Value of the `url` query parameter.
    pub url: Option<String>,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[async_trait]
pub trait ForwardRequestUseCase: Send + Sync {
    async fn execute(&self, params: ForwardRequestParams) -> Result<RelayResponse, RelayError>;
}
