use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::relay::errors::RelayError;
use crate::domain::relay::model::{
    RelayRequest, RelayResponse, is_forwarded_header, method_carries_body, parse_target,
};
use crate::domain::relay::services::RelayService;
use crate::domain::relay::use_cases::forward::{ForwardRequestParams, ForwardRequestUseCase};

pub struct ForwardRequestUseCaseImpl {
    pub service: Arc<dyn RelayService>,
    /// Hosts the relay may reach. Empty allows any host.
    pub allowed_hosts: Vec<String>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ForwardRequestUseCase for ForwardRequestUseCaseImpl {
    async fn execute(&self, params: ForwardRequestParams) -> Result<RelayResponse, RelayError> {
        let raw_url = params
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or(RelayError::MissingUrl)?;

        let target = parse_target(&raw_url, &self.allowed_hosts).inspect_err(|err| {
            self.logger
                .warn(&format!("Relay target {} refused: {}", raw_url, err));
        })?;

        let method = params.method.to_ascii_uppercase();
        let body = if method_carries_body(&method) {
            params.body
        } else {
            None
        };
        let headers = params
            .headers
            .into_iter()
            .filter(|(name, _)| is_forwarded_header(name))
            .collect();

        self.logger
            .info(&format!("Relaying {} {}", method, target));

        let upstream = self
            .service
            .send(RelayRequest {
                target,
                method,
                headers,
                body,
            })
            .await
            .inspect_err(|err| {
                self.logger.error(&format!("Relay request failed: {}", err));
            })?;

        let response = RelayResponse::from_upstream(upstream).inspect_err(|_| {
            self.logger.error("Relay upstream sent undecodable JSON");
        })?;

        self.logger
            .debug(&format!("Relay upstream answered {}", response.status));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::relay::model::UpstreamResponse;
    use mockall::mock;

    mock! {
        pub Relay {}

        #[async_trait]
        impl RelayService for Relay {
            async fn send(&self, request: RelayRequest) -> Result<UpstreamResponse, RelayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(url: Option<&str>, method: &str, body: Option<&str>) -> ForwardRequestParams {
        ForwardRequestParams {
            url: url.map(str::to_string),
            method: method.to_string(),
            headers: vec![
                ("host".to_string(), "localhost:8080".to_string()),
                ("authorization".to_string(), "Bearer abc".to_string()),
                ("accept-encoding".to_string(), "gzip, deflate, br".to_string()),
            ],
            body: body.map(str::to_string),
        }
    }

    fn json_ok() -> UpstreamResponse {
        UpstreamResponse {
            status: 200,
            content_type: "application/json".to_string(),
            body: "{\"status\": \"success\"}".to_string(),
        }
    }

    #[tokio::test]
    async fn should_reject_missing_url() {
        let mut mock_service = MockRelay::new();
        mock_service.expect_send().never();

        let use_case = ForwardRequestUseCaseImpl {
            service: Arc::new(mock_service),
            allowed_hosts: vec![],
            logger: mock_logger(),
        };

        let missing = use_case.execute(params(None, "GET", None)).await;
        let blank = use_case.execute(params(Some(" "), "GET", None)).await;

        assert_eq!(missing.unwrap_err(), RelayError::MissingUrl);
        assert_eq!(blank.unwrap_err(), RelayError::MissingUrl);
    }

    #[tokio::test]
    async fn should_drop_body_and_connection_headers_for_get() {
        let mut mock_service = MockRelay::new();
        mock_service
            .expect_send()
            .withf(|request| {
                request.method == "GET"
                    && request.body.is_none()
                    && request.headers
                        == vec![("authorization".to_string(), "Bearer abc".to_string())]
                    && request.target.as_str() == "https://api.example.com/items?page=2"
            })
            .returning(|_| Ok(json_ok()));

        let use_case = ForwardRequestUseCaseImpl {
            service: Arc::new(mock_service),
            allowed_hosts: vec![],
            logger: mock_logger(),
        };

        let response = use_case
            .execute(params(
                Some("https://api.example.com/items?page=2"),
                "get",
                Some("ignored"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{\"status\":\"success\"}");
    }

    #[tokio::test]
    async fn should_forward_raw_body_for_post() {
        let mut mock_service = MockRelay::new();
        mock_service
            .expect_send()
            .withf(|request| request.method == "POST" && request.body.as_deref() == Some("a=1&b=2"))
            .returning(|_| {
                Ok(UpstreamResponse {
                    status: 502,
                    content_type: "text/plain".to_string(),
                    body: "bad gateway".to_string(),
                })
            });

        let use_case = ForwardRequestUseCaseImpl {
            service: Arc::new(mock_service),
            allowed_hosts: vec![],
            logger: mock_logger(),
        };

        let response = use_case
            .execute(params(Some("http://upstream.test/hook"), "POST", Some("a=1&b=2")))
            .await
            .unwrap();

        assert_eq!(response.status, 502);
        assert_eq!(response.body, "bad gateway");
    }

    #[tokio::test]
    async fn should_refuse_host_outside_allowlist() {
        let mut mock_service = MockRelay::new();
        mock_service.expect_send().never();

        let use_case = ForwardRequestUseCaseImpl {
            service: Arc::new(mock_service),
            allowed_hosts: vec!["api.chapa.co".to_string()],
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Some("http://169.254.169.254/latest"), "GET", None))
            .await;

        assert_eq!(result.unwrap_err(), RelayError::TargetNotAllowed);
    }

    #[tokio::test]
    async fn should_surface_upstream_failure() {
        let mut mock_service = MockRelay::new();
        mock_service
            .expect_send()
            .returning(|_| Err(RelayError::UpstreamFailed));

        let use_case = ForwardRequestUseCaseImpl {
            service: Arc::new(mock_service),
            allowed_hosts: vec![],
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Some("https://down.example.com"), "GET", None))
            .await;

        assert_eq!(result.unwrap_err(), RelayError::UpstreamFailed);
    }

    #[tokio::test]
    async fn should_fail_when_upstream_json_is_malformed() {
        let mut mock_service = MockRelay::new();
        mock_service.expect_send().returning(|_| {
            Ok(UpstreamResponse {
                status: 200,
                content_type: "application/json".to_string(),
                body: "<html>".to_string(),
            })
        });

        let use_case = ForwardRequestUseCaseImpl {
            service: Arc::new(mock_service),
            allowed_hosts: vec![],
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Some("https://api.example.com"), "GET", None))
            .await;

        assert_eq!(result.unwrap_err(), RelayError::UpstreamFailed);
    }
}
