use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_REDIRECTS: usize = 5;

/// Shared HTTP client used for relayed requests.
pub struct RelayClient {
    pub client: Client,
    pub timeout: Duration,
}

impl RelayClient {
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_client_with_configured_timeout() {
        let client = RelayClient::new(Duration::from_secs(7));

        assert_eq!(client.unwrap().timeout, Duration::from_secs(7));
    }
}
