//! Response interpretation shared by every endpoint

use serde::de::DeserializeOwned;

use faunara_core::prelude::*;
use faunara_core::ErrorBody;

/// Maximum number of characters of a non-JSON body quoted back to the user.
pub const EXCERPT_LIMIT: usize = 200;

/// Whether a `Content-Type` header value declares JSON
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// First [`EXCERPT_LIMIT`] characters of a body
pub fn body_excerpt(body: &str) -> String {
    body.chars().take(EXCERPT_LIMIT).collect()
}

/// Turn a raw HTTP response into a typed body or a classified error.
///
/// Order matters and mirrors what the service guarantees:
/// 1. No JSON content type → [`Error::Transport`], whatever the status.
/// 2. Non-2xx → [`Error::Domain`] carrying the body's `error` (or `fallback`).
/// 3. 2xx → the parsed body.
pub fn interpret_response<T: DeserializeOwned>(
    status: u16,
    content_type: Option<&str>,
    body: &str,
    fallback: &str,
) -> Result<T> {
    if !is_json_content_type(content_type) {
        debug!(
            "Non-JSON response (status {}, content-type {:?})",
            status, content_type
        );
        return Err(Error::transport(status, body_excerpt(body)));
    }

    if !(200..300).contains(&status) {
        let error_body: ErrorBody = serde_json::from_str(body)?;
        let message = error_body
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(Error::domain(status, message, error_body.code));
    }

    Ok(serde_json::from_str(body)?)
}
