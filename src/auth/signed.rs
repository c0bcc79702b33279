use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use reqwest::Request;
use reqwest::header::{HeaderName, HeaderValue};
use sha2::Sha256;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use super::Authorizer;
use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

const X_KEY_ID: HeaderName = HeaderName::from_static("x-key-id");
const X_TIME: HeaderName = HeaderName::from_static("x-time");
const X_SIGN: HeaderName = HeaderName::from_static("x-sign");

/// Signed-request authorization for applications acting on behalf of clients.
///
/// Each request carries `X-Key-Id`, `X-Time` (unix seconds) and `X-Sign`, the
/// base64 HMAC-SHA256 over the timestamp followed by the request path and
/// query.
#[derive(Clone)]
pub struct SignedAuth {
    key_id: String,
    secret: Vec<u8>,
}

impl SignedAuth {
    pub fn new(key_id: impl Into<String>, secret: impl AsRef<[u8]>) -> Self {
        Self {
            key_id: key_id.into(),
            secret: secret.as_ref().to_vec(),
        }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub(crate) fn sign(&self, timestamp: u64, path: &str) -> Result<String> {
        // HMAC accepts keys of any length; this only fails for fixed-size MACs.
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| Error::Authorization(format!("invalid signing key: {}", e)))?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(path.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }

    fn sign_request(&self, request: &mut Request, timestamp: u64) -> Result<()> {
        let url = request.url();
        let path = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let signature = self.sign(timestamp, &path)?;

        let key_id = HeaderValue::from_str(&self.key_id)
            .map_err(|e| Error::Authorization(format!("invalid X-Key-Id value: {}", e)))?;
        let mut signature = HeaderValue::from_str(&signature)
            .map_err(|e| Error::Authorization(format!("invalid X-Sign value: {}", e)))?;
        signature.set_sensitive(true);

        let headers = request.headers_mut();
        headers.insert(X_KEY_ID, key_id);
        headers.insert(X_TIME, HeaderValue::from(timestamp));
        headers.insert(X_SIGN, signature);
        Ok(())
    }
}

impl fmt::Debug for SignedAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedAuth")
            .field("key_id", &self.key_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Authorizer for SignedAuth {
    fn auth(&self, request: &mut Request) -> Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| Error::Authorization(format!("system clock before unix epoch: {}", e)))?
            .as_secs();
        self.sign_request(request, timestamp)
    }
}
