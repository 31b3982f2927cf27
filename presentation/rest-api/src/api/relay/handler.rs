use std::sync::Arc;

use poem::http::{HeaderMap, StatusCode, header::CONTENT_TYPE};
use poem::web::{Data, Query};
use poem::{Body, Request, Response, handler};
use serde::Deserialize;

use business::domain::relay::errors::RelayError;
use business::domain::relay::model::RelayResponse;
use business::domain::relay::use_cases::forward::{ForwardRequestParams, ForwardRequestUseCase};

use crate::api::relay::error_mapper::IntoRelayErrorResponse;

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    pub url: Option<String>,
}

/// Forwards the request to `?url=` and relays the upstream answer.
///
/// Mounted outside the OpenAPI service: bodies and responses are opaque.
#[handler]
pub async fn proxy(
    req: &Request,
    Query(query): Query<ProxyQuery>,
    body: Body,
    Data(use_case): Data<&Arc<dyn ForwardRequestUseCase>>,
) -> Response {
    let body = match read_body(body).await {
        Ok(body) => body,
        Err(err) => return err.into_relay_error_response(),
    };

    let params = ForwardRequestParams {
        url: query.url,
        method: req.method().as_str().to_string(),
        headers: header_pairs(req.headers()),
        body,
    };

    match use_case.execute(params).await {
        Ok(response) => relay_response(response),
        Err(err) => err.into_relay_error_response(),
    }
}

/// Request body as text. Invalid UTF-8 is replaced rather than dropped, so
/// the upstream always receives what the caller sent. An empty body is `None`.
async fn read_body(body: Body) -> Result<Option<String>, RelayError> {
    let bytes = body.into_bytes().await.map_err(|e| {
        tracing::warn!("Unreadable proxy request body: {e}");
        RelayError::UpstreamFailed
    })?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Text-valued headers as name/value pairs. Non-UTF-8 values are dropped.
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}

fn relay_response(response: RelayResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder().status(status);
    if !response.content_type.is_empty() {
        builder = builder.header(CONTENT_TYPE, response.content_type);
    }
    builder.body(response.body)
}

#[cfg(test)]
mod tests {
    use poem::http::HeaderValue;

    use super::*;

    #[tokio::test]
    async fn should_keep_non_utf8_body_instead_of_dropping_it() {
        let body = read_body(Body::from(vec![0xff, 0xfe])).await.unwrap();

        assert_eq!(body.as_deref(), Some("\u{fffd}\u{fffd}"));
    }

    #[tokio::test]
    async fn should_read_text_body_verbatim() {
        let body = read_body(Body::from_string("a=1&b=2".to_string()))
            .await
            .unwrap();

        assert_eq!(body.as_deref(), Some("a=1&b=2"));
    }

    #[tokio::test]
    async fn should_treat_empty_body_as_absent() {
        let body = read_body(Body::empty()).await.unwrap();

        assert!(body.is_none());
    }

    #[test]
    fn should_collect_text_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
        headers.insert(
            "x-binary",
            HeaderValue::from_bytes(&[0xfa, 0xfb]).unwrap(),
        );

        let pairs = header_pairs(&headers);

        assert_eq!(
            pairs,
            vec![("authorization".to_string(), "Bearer abc".to_string())]
        );
    }

    #[tokio::test]
    async fn should_pass_through_status_and_content_type() {
        let response = relay_response(RelayResponse {
            status: 404,
            content_type: "application/json".to_string(),
            body: r#"{"message":"nope"}"#.to_string(),
        });

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = response.into_body().into_string().await.unwrap();
        assert_eq!(body, r#"{"message":"nope"}"#);
    }

    #[test]
    fn should_omit_content_type_when_upstream_sent_none() {
        let response = relay_response(RelayResponse {
            status: 204,
            content_type: String::new(),
            body: String::new(),
        });

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }
}
