//! Middleware for admin authentication and cross-origin requests

pub mod auth;
pub mod cors;

use axum::{http::StatusCode, response::Json};
use serde::Serialize;

/// Standard error response for middleware
#[derive(Debug, Serialize)]
pub struct MiddlewareError {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl MiddlewareError {
    /// Create a new middleware error
    #[must_use]
    pub fn new(error: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            code: code.to_string(),
            request_id: None,
        }
    }

    /// Attach the caller's request ID, if it sent one
    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }
}

/// Convert middleware error to HTTP response
impl From<MiddlewareError> for (StatusCode, Json<MiddlewareError>) {
    fn from(error: MiddlewareError) -> Self {
        let status = match error.code.as_str() {
            "MISSING_API_KEY" | "INVALID_AUTH_HEADER" | "INVALID_API_KEY" => {
                StatusCode::UNAUTHORIZED
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(error))
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_map_to_status() {
        let cases = [
            ("MISSING_API_KEY", StatusCode::UNAUTHORIZED),
            ("INVALID_AUTH_HEADER", StatusCode::UNAUTHORIZED),
            ("INVALID_API_KEY", StatusCode::UNAUTHORIZED),
            ("SOMETHING_ELSE", StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (code, expected) in cases {
            let (status, _): (StatusCode, Json<MiddlewareError>) =
                MiddlewareError::new("msg", code).into();
            assert_eq!(status, expected, "code {code}");
        }
    }

    #[test]
    fn test_request_id_is_omitted_when_absent() {
        let json = serde_json::to_value(MiddlewareError::new("nope", "INVALID_API_KEY")).unwrap();
        assert!(json.get("request_id").is_none());

        let json = serde_json::to_value(
            MiddlewareError::new("nope", "INVALID_API_KEY")
                .with_request_id(Some("req-1".to_string())),
        )
        .unwrap();
        assert_eq!(json["request_id"], "req-1");
    }
}
