//! Admin API key guard

use crate::{middleware::MiddlewareError, state::AppState};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// API key header name
const API_KEY_HEADER: &str = "X-API-Key";
/// Alternative header name (commonly used)
const AUTH_HEADER: &str = "Authorization";
/// Caller-supplied request identifier echoed in errors
const REQUEST_ID_HEADER: &str = "X-Request-ID";

type AuthRejection = (StatusCode, axum::Json<MiddlewareError>);

/// Reject requests that do not carry a configured admin key
///
/// A no-op unless `security.require_api_key` is set.
///
/// # Errors
///
/// Returns `401` with `MISSING_API_KEY`, `INVALID_AUTH_HEADER` or
/// `INVALID_API_KEY` when the key is absent, malformed or unknown.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    if !state.config.security.require_api_key {
        debug!("API key authentication disabled, skipping validation");
        return Ok(next.run(request).await);
    }

    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(String::from);

    let api_key = extract_api_key(&headers)
        .map_err(|e| AuthRejection::from(e.with_request_id(request_id.clone())))?;

    if !is_admin_key(&api_key, &state.config.security.admin_key_hashes) {
        let prefix: String = api_key.chars().take(4).collect();
        warn!("Invalid admin API key attempted: {}...", prefix);
        return Err(MiddlewareError::new("Invalid API key", "INVALID_API_KEY")
            .with_request_id(request_id)
            .into());
    }

    debug!("Admin request authenticated");
    Ok(next.run(request).await)
}

/// Extract API key from request headers
fn extract_api_key(headers: &HeaderMap) -> Result<String, MiddlewareError> {
    // Try X-API-Key header first
    if let Some(api_key) = headers.get(API_KEY_HEADER) {
        return match api_key.to_str() {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(MiddlewareError::new(
                "Invalid API key format in X-API-Key header",
                "INVALID_AUTH_HEADER",
            )),
        };
    }

    // Try Authorization header with Bearer scheme
    if let Some(auth_header) = headers.get(AUTH_HEADER) {
        if let Ok(auth_str) = auth_header.to_str()
            && let Some(bearer_token) = auth_str.strip_prefix("Bearer ")
            && !bearer_token.trim().is_empty()
        {
            return Ok(bearer_token.trim().to_string());
        }
        return Err(MiddlewareError::new(
            "Invalid Authorization header format. Use 'Bearer <token>'",
            "INVALID_AUTH_HEADER",
        ));
    }

    Err(MiddlewareError::new(
        "API key required. Provide via X-API-Key header or Authorization: Bearer <token>",
        "MISSING_API_KEY",
    ))
}

/// Hash the key and look it up among the configured digests
fn is_admin_key(api_key: &str, admin_key_hashes: &[String]) -> bool {
    let key_hash = format!("{:x}", md5::compute(api_key));
    admin_key_hashes
        .iter()
        .any(|hash| hash.eq_ignore_ascii_case(&key_hash))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_extract_from_api_key_header() {
        let key = extract_api_key(&headers(&[("x-api-key", "secret")])).unwrap();
        assert_eq!(key, "secret");
    }

    #[test]
    fn test_extract_from_bearer_token() {
        let key = extract_api_key(&headers(&[("authorization", "Bearer secret")])).unwrap();
        assert_eq!(key, "secret");
    }

    #[test]
    fn test_api_key_header_wins_over_bearer() {
        let key = extract_api_key(&headers(&[
            ("x-api-key", "from-header"),
            ("authorization", "Bearer from-bearer"),
        ]))
        .unwrap();
        assert_eq!(key, "from-header");
    }

    #[test]
    fn test_non_bearer_authorization_is_rejected() {
        let err = extract_api_key(&headers(&[("authorization", "Basic dXNlcjpwYXNz")])).unwrap_err();
        assert_eq!(err.code, "INVALID_AUTH_HEADER");

        let err = extract_api_key(&headers(&[("authorization", "Bearer ")])).unwrap_err();
        assert_eq!(err.code, "INVALID_AUTH_HEADER");
    }

    #[test]
    fn test_missing_key() {
        let err = extract_api_key(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.code, "MISSING_API_KEY");
    }

    #[test]
    fn test_is_admin_key() {
        let hashes = vec![format!("{:x}", md5::compute("admin-key"))];

        assert!(is_admin_key("admin-key", &hashes));
        assert!(!is_admin_key("other-key", &hashes));
        assert!(!is_admin_key("admin-key", &[]));
    }

    #[test]
    fn test_is_admin_key_ignores_digest_case() {
        let hashes = vec![format!("{:x}", md5::compute("admin-key")).to_uppercase()];
        assert!(is_admin_key("admin-key", &hashes));
    }
}
