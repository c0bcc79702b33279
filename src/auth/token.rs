use reqwest::Request;
use reqwest::header::{HeaderName, HeaderValue};
use std::fmt;

use super::Authorizer;
use crate::error::{Error, Result};

const X_TOKEN: HeaderName = HeaderName::from_static("x-token");

/// Personal API token sent in the `X-Token` header.
#[derive(Clone)]
pub struct TokenAuth {
    token: String,
}

impl TokenAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl From<&str> for TokenAuth {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for TokenAuth {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Authorizer for TokenAuth {
    fn auth(&self, request: &mut Request) -> Result<()> {
        let mut value = HeaderValue::from_str(&self.token)
            .map_err(|e| Error::Authorization(format!("invalid X-Token value: {}", e)))?;
        value.set_sensitive(true);
        request.headers_mut().insert(X_TOKEN, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::test_support::request;

    #[test]
    fn test_sets_x_token_header() {
        let mut req = request("https://api.monobank.ua/personal/client-info");
        TokenAuth::new("fake_token").auth(&mut req).unwrap();

        let value = &req.headers()["X-Token"];
        assert_eq!(value, "fake_token");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_replaces_existing_header() {
        let mut req = request("https://api.monobank.ua/personal/client-info");
        req.headers_mut()
            .insert(X_TOKEN, HeaderValue::from_static("stale"));

        TokenAuth::from("fresh").auth(&mut req).unwrap();

        assert_eq!(req.headers().get_all("X-Token").iter().count(), 1);
        assert_eq!(req.headers()["X-Token"], "fresh");
    }

    #[test]
    fn test_rejects_invalid_header_value() {
        let mut req = request("https://api.monobank.ua/personal/client-info");
        let err = TokenAuth::new("bad\ntoken").auth(&mut req).unwrap_err();

        assert!(matches!(err, Error::Authorization(_)));
        assert!(req.headers().is_empty());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", TokenAuth::new("super-secret"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
