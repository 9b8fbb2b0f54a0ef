//! CORS policy built from `api` configuration

use http::{HeaderName, HeaderValue, Method, header};
use shopdash_core::config::ApiConfig;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer, or `None` when CORS is disabled
///
/// `"*"` allows any origin; entries of the form `*.example.com` allow any
/// subdomain of `example.com`; everything else must match exactly.
#[must_use]
pub fn cors_layer(api: &ApiConfig) -> Option<CorsLayer> {
    if !api.enable_cors {
        return None;
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-api-key"),
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(Duration::from_secs(86_400));

    if api.cors_origins.iter().any(|origin| origin == "*") {
        return Some(layer.allow_origin(Any));
    }

    let allowed = api.cors_origins.clone();
    Some(
        layer.allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin
                .to_str()
                .is_ok_and(|origin| is_origin_allowed(origin, &allowed))
        })),
    )
}

/// Check if the given origin is allowed by the CORS policy
fn is_origin_allowed(origin: &str, allowed_origins: &[String]) -> bool {
    allowed_origins.iter().any(|allowed| {
        if allowed == "*" || allowed == origin {
            return true;
        }
        // "*.example.com" keeps the leading dot so "example.com" itself is excluded
        allowed
            .strip_prefix('*')
            .is_some_and(|suffix| suffix.starts_with('.') && origin.ends_with(suffix))
    })
}
