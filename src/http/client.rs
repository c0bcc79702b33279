//! The Monobank API client.

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Body, Method, StatusCode};
use std::fmt;

use super::url::join_endpoint;
use crate::auth::Authorizer;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{Error, Result};

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// Performs authorized round trips against the Monobank API and hands back
/// the raw body together with the status code.
///
/// The client owns a pooled transport and can be shared between tasks (wrap
/// it in an `Arc`). Non-2xx responses are returned as `Ok`; interpreting the
/// API's error payloads is left to the caller.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    auth: Box<dyn Authorizer>,
}

impl Client {
    /// Creates a client for the production API with the default transport
    /// settings: 5 second timeout and 50 idle pooled connections.
    pub fn new(auth: impl Authorizer + 'static) -> Result<Self> {
        Self::with_config(auth, ClientConfig::default())
    }

    pub fn with_config(auth: impl Authorizer + 'static, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.effective_idle_per_host())
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url,
            auth: Box::new(auth),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Points subsequent requests at another server, e.g. a test double.
    ///
    /// The value is validated lazily: a malformed URL makes every following
    /// request fail with [`Error::Configuration`] without touching the network.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Restores the production base URL.
    pub fn reset_base_url(&mut self) {
        self.base_url = DEFAULT_BASE_URL.to_string();
    }

    /// Resolves `endpoint` against the current base URL.
    pub fn build_url(&self, endpoint: &str) -> Result<String> {
        join_endpoint(&self.base_url, endpoint).map(String::from)
    }

    /// GETs `endpoint` and returns the raw response body and status.
    #[tracing::instrument(skip(self))]
    pub async fn get_json(&self, endpoint: &str) -> Result<(Vec<u8>, StatusCode)> {
        self.round_trip(Method::GET, endpoint, None).await
    }

    /// POSTs `payload` to `endpoint` and returns the raw response body and
    /// status. The payload may be a buffer or a stream built with
    /// [`Body::wrap_stream`].
    #[tracing::instrument(skip(self, payload))]
    pub async fn post_json(
        &self,
        endpoint: &str,
        payload: impl Into<Body>,
    ) -> Result<(Vec<u8>, StatusCode)> {
        self.round_trip(Method::POST, endpoint, Some(payload.into()))
            .await
    }

    async fn round_trip(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<Body>,
    ) -> Result<(Vec<u8>, StatusCode)> {
        let url = join_endpoint(&self.base_url, endpoint)?;
        debug!("{} {}...", method, url);

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, APPLICATION_JSON);
        if let Some(payload) = payload {
            builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(payload);
        }
        let mut request = builder.build().map_err(Error::RequestConstruction)?;

        self.auth.auth(&mut request)?;

        let response = self.http.execute(request).await.map_err(Error::Transport)?;
        let status = response.status();

        // A failed read drops whatever was received so far.
        let body = response.bytes().await.map_err(Error::Read)?;
        debug!("{} {} -> {} ({} bytes)", method, endpoint, status, body.len());

        Ok((body.to_vec(), status))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
