use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

use business::domain::relay::errors::RelayError;
use business::domain::relay::model::{RelayRequest, UpstreamResponse};
use business::domain::relay::services::RelayService;

use crate::client::RelayClient;

pub struct RelayServiceReqwest {
    client: RelayClient,
}

impl RelayServiceReqwest {
    pub fn new(client: RelayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RelayService for RelayServiceReqwest {
    async fn send(&self, request: RelayRequest) -> Result<UpstreamResponse, RelayError> {
        let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            tracing::warn!("Relay refused method {}", request.method);
            RelayError::UpstreamFailed
        })?;

        let mut builder = self.client.client.request(method, request.target);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::warn!("Relay upstream unreachable: {}", err);
            RelayError::UpstreamFailed
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await.map_err(|err| {
            tracing::warn!("Relay upstream body unreadable: {}", err);
            RelayError::UpstreamFailed
        })?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
