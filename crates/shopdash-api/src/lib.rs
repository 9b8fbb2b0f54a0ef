//! `shopdash` admin API server library

#![forbid(unsafe_code)]

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

pub use state::AppState;

use axum::Router;
use shopdash_core::Config;
use shopdash_core::context_error::Result;
use shopdash_database::{PgPool, RecordSource};
use std::sync::Arc;

/// Build the API router reading dashboard records from `pool`
///
/// # Errors
///
/// Returns an error if the application state validation fails.
pub fn build_router(config: Config, pool: PgPool) -> Result<Router> {
    finish(AppState::new(config, pool))
}

/// Build the API router over an explicit record source
///
/// `pool` still backs the health and readiness checks.
///
/// # Errors
///
/// Returns an error if the application state validation fails.
pub fn build_router_with_source(
    config: Config,
    pool: PgPool,
    source: Arc<dyn RecordSource>,
) -> Result<Router> {
    finish(AppState::with_source(config, pool, source))
}

fn finish(app_state: AppState) -> Result<Router> {
    app_state.validate()?;
    Ok(routes::build_router(Arc::new(app_state)))
}
