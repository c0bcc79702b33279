//! Error type shared by the client and the authorizers.

/// Failures surfaced by [`Client`](crate::Client) operations.
///
/// Every variant propagates to the immediate caller untouched. Non-2xx HTTP
/// statuses are not errors at this layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid base URL {url:?}: {reason}")]
    Configuration { url: String, reason: String },

    /// The outgoing request could not be assembled.
    #[error("failed to build request: {0}")]
    RequestConstruction(#[source] reqwest::Error),

    /// The authorizer could not attach its credentials.
    #[error("failed to authorize request: {0}")]
    Authorization(String),

    /// DNS, connect, TLS or timeout failure, or the transport could not be created.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read after the headers arrived.
    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),
}

impl Error {
    /// True when the round trip was cut off by the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(e) | Error::Read(e) => e.is_timeout(),
            _ => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
