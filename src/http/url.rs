//! Resolution of endpoint paths against a base URL.

use reqwest::Url;
use std::fmt::Write;

use crate::error::{Error, Result};

/// Joins `endpoint` onto the path of `base_url`.
///
/// Both paths are split on `/` and rejoined with single separators, so
/// leading or trailing slashes on either side never produce `//` or a missing
/// separator. `.` segments are dropped and `..` removes the previous segment
/// without climbing above the root. Scheme, host, port and query of the base
/// are kept as they are. Control characters in the endpoint are
/// percent-escaped.
///
/// A base URL with control characters or surrounding whitespace is rejected
/// rather than handed to the parser, which would silently strip them.
pub(crate) fn join_endpoint(base_url: &str, endpoint: &str) -> Result<Url> {
    if base_url.chars().any(char::is_control) || base_url.trim() != base_url {
        return Err(Error::Configuration {
            url: base_url.to_string(),
            reason: "contains control characters or surrounding whitespace".to_string(),
        });
    }

    let mut url = Url::parse(base_url).map_err(|e| Error::Configuration {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Configuration {
            url: base_url.to_string(),
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }

    let path = join_paths(url.path(), endpoint);
    url.set_path(&path);
    Ok(url)
}

fn join_paths(base: &str, endpoint: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(endpoint.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    escape_controls(&format!("/{}", segments.join("/")))
}

fn escape_controls(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_control() {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(escaped, "%{:02X}", b);
            }
        } else {
            escaped.push(c);
        }
    }
    escaped
}
