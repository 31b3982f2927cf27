use url::Url;

use super::errors::RelayError;

/// Request headers that describe the inbound connection rather than the
/// payload. They are never copied onto the upstream request.
///
/// `accept-encoding` is left to the HTTP client, which negotiates and
/// decompresses on its own so relayed bodies arrive decoded.
pub const SKIPPED_HEADERS: [&str; 10] = [
    "host",
    "accept-encoding",
    "connection",
    "content-length",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// A request ready to be sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub target: Url,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Upstream answer as received, before any content-type handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Empty when the upstream sent no content-type.
    pub content_type: String,
    pub body: String,
}

/// What the relay hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

/// Parses and checks a relay target. Only http and https are forwarded.
///
/// An empty `allowed_hosts` list allows every host.
pub fn parse_target(raw: &str, allowed_hosts: &[String]) -> Result<Url, RelayError> {
    let target = Url::parse(raw.trim()).map_err(|_| RelayError::InvalidUrl)?;
    if !matches!(target.scheme(), "http" | "https") {
        return Err(RelayError::InvalidUrl);
    }
    let host = target.host_str().ok_or(RelayError::InvalidUrl)?;
    if !allowed_hosts.is_empty()
        && !allowed_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
    {
        return Err(RelayError::TargetNotAllowed);
    }
    Ok(target)
}

/// GET and HEAD requests are forwarded without a body.
pub fn method_carries_body(method: &str) -> bool {
    !(method.eq_ignore_ascii_case("GET") || method.eq_ignore_ascii_case("HEAD"))
}

pub fn is_forwarded_header(name: &str) -> bool {
    !SKIPPED_HEADERS
        .iter()
        .any(|skipped| skipped.eq_ignore_ascii_case(name))
}

impl RelayResponse {
    /// JSON bodies are decoded and re-encoded; anything else passes through
    /// as text. A JSON content-type with an undecodable body is an upstream
    /// failure.
    pub fn from_upstream(upstream: UpstreamResponse) -> Result<Self, RelayError> {
        let body = if upstream.content_type.contains("application/json") {
            let value: serde_json::Value = serde_json::from_str(&upstream.body)
                .map_err(|_| RelayError::UpstreamFailed)?;
            value.to_string()
        } else {
            upstream.body
        };

        Ok(Self {
            status: upstream.status,
            content_type: upstream.content_type,
            body,
        })
    }
}
