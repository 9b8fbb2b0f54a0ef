//! API route definitions and middleware stack

use crate::{handlers, middleware, state::AppState};
use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

/// Build admin routes guarded by the API key check
pub fn admin_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/admin/stats",
            get(handlers::stats::get_admin_stats),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(state),
            middleware::auth::require_admin,
        ))
}

/// Build health check routes (no authentication required)
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/", get(root_endpoint))
}

/// Combine all routes and apply the shared middleware stack
pub fn build_router(state: Arc<AppState>) -> Router {
    let request_timeout = Duration::from_secs(state.config.security.request_timeout);
    let cors = middleware::cors::cors_layer(&state.config.api);

    let router = Router::new()
        .merge(admin_routes(&state))
        .merge(health_routes())
        // Fallback handler for unknown routes
        .fallback(not_found_handler)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout));

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}

/// Root endpoint for basic connectivity
async fn root_endpoint() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "shopdash admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
        "endpoints": {
            "stats": "/api/admin/stats",
            "health": "/health",
            "ready": "/ready"
        }
    }))
}
