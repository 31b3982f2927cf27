use std::env;
use std::time::Duration;

use relay::client::DEFAULT_TIMEOUT_SECS;

use super::cors_config::split_list;

/// Relay route settings
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub timeout: Duration,
    /// Hosts the relay may reach. Empty allows any host.
    pub allowed_hosts: Vec<String>,
}

impl RelayConfig {
    /// Environment variables:
    /// - RELAY_TIMEOUT_SECS: upstream timeout in seconds (default: 30)
    /// - RELAY_ALLOWED_HOSTS: comma-separated host allowlist (default: any host)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RELAY_TIMEOUT_SECS").ok().as_deref(),
            env::var("RELAY_ALLOWED_HOSTS").ok().as_deref(),
        )
    }

    fn from_values(timeout_secs: Option<&str>, allowed_hosts: Option<&str>) -> Self {
        let timeout_secs = timeout_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            timeout: Duration::from_secs(timeout_secs),
            allowed_hosts: allowed_hosts.map(split_list).unwrap_or_default(),
        }
    }
}
