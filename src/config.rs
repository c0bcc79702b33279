//! Client configuration and its defaults.

use serde::Deserialize;
use std::time::Duration;

/// Production URL of the Monobank API.
pub const DEFAULT_BASE_URL: &str = "https://api.monobank.ua";

/// Whole-request timeout, from connect until the body is fully read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Idle connections kept in the pool across all hosts.
pub const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 50;

/// Idle connections kept in the pool for a single host.
pub const DEFAULT_MAX_IDLE_CONNECTIONS_PER_HOST: usize = 50;

/// Settings applied when a [`Client`](crate::Client) is built.
///
/// Deserializes from any serde format; missing fields fall back to the
/// defaults, and the timeout is given in whole seconds as `timeout_secs`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(rename = "timeout_secs", deserialize_with = "deserialize_secs")]
    pub timeout: Duration,
    pub max_idle_connections: usize,
    pub max_idle_connections_per_host: usize,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
            max_idle_connections_per_host: DEFAULT_MAX_IDLE_CONNECTIONS_PER_HOST,
            user_agent: format!("monoclient/{}", env!("MONOCLIENT_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The idle cap handed to the transport.
    ///
    /// reqwest only bounds idle connections per host. The client talks to a
    /// single host, so the smaller of the two limits is the one that holds.
    pub(crate) fn effective_idle_per_host(&self) -> usize {
        self.max_idle_connections
            .min(self.max_idle_connections_per_host)
    }
}

fn deserialize_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}
