//! Minimal client for the Monobank REST API.
//!
//! Builds endpoint URLs against a configurable base URL, lets a pluggable
//! [`Authorizer`] attach credentials, and returns raw response bytes with the
//! status code. Response parsing is left to the caller.
//!
//! ```no_run
//! # async fn run() -> monoclient::Result<()> {
//! use monoclient::{Client, TokenAuth};
//!
//! let client = Client::new(TokenAuth::new("my-token"))?;
//! let (body, status) = client.get_json("/personal/client-info").await?;
//! println!("{} {}", status, String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod http;

pub use auth::{Authorizer, NoAuth, SignedAuth, TokenAuth};
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_IDLE_CONNECTIONS,
    DEFAULT_MAX_IDLE_CONNECTIONS_PER_HOST, DEFAULT_TIMEOUT,
};
pub use error::{Error, Result};
pub use http::Client;
