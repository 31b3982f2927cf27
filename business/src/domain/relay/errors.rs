#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay.missing_url")]
    MissingUrl,
    #[error("relay.invalid_url")]
    InvalidUrl,
    #[error("relay.target_not_allowed")]
    TargetNotAllowed,
    #[error("relay.upstream_failed")]
    UpstreamFailed,
}
