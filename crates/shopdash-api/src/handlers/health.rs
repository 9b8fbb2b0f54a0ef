//! Health check endpoints for monitoring and diagnostics

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use std::time::Instant;
use tracing::{debug, error};

static STARTED_AT: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"`; failures answer `503` with no body
    pub status: String,
    /// Crate version of the running server
    pub version: String,
    /// When the check ran
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// State of the store the dashboard counts are read from
    pub database: DatabaseHealth,
    /// Seconds since the first health request was served
    pub uptime_seconds: u64,
}

/// Reachability of the order/product/profile store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    /// `SELECT 1` succeeded
    pub connected: bool,
    /// Round trip of that query
    pub latency_ms: u64,
    /// Pool occupancy at the time of the check
    pub pool: PoolStats,
}

/// Snapshot of the `sqlx` pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Open connections
    pub size: u32,
    /// Open connections not checked out
    pub idle: u32,
    /// `database.max_connections`
    pub max: u32,
}

/// Body of `GET /ready`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Only ever `true`; not ready answers `503`
    pub ready: bool,
    /// When the check ran
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Basic health check endpoint for monitoring systems
///
/// Returns `200` with pool statistics when the database answers, `503`
/// otherwise. The statistics endpoint itself keeps answering while the
/// database is down, so this is the place to alert on.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let database_health = match check_database_health(&state).await {
        Ok(health) => health,
        Err(e) => {
            error!("Database health check failed: {}", e);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    debug!(
        "Health check completed in {}ms",
        database_health.latency_ms
    );

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        database: database_health,
        uptime_seconds: STARTED_AT.elapsed().as_secs(),
    }))
}

/// `200` once the store answers, so the stats endpoint can serve real counts
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    match sqlx::query("SELECT 1").fetch_one(&state.pool).await {
        Ok(_) => Ok(Json(ReadinessResponse {
            ready: true,
            timestamp: chrono::Utc::now(),
        })),
        Err(e) => {
            error!("Readiness check failed - database not accessible: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

async fn check_database_health(state: &Arc<AppState>) -> Result<DatabaseHealth, sqlx::Error> {
    let start_time = Instant::now();

    sqlx::query("SELECT 1 as health_check")
        .fetch_one(&state.pool)
        .await?;

    Ok(DatabaseHealth {
        connected: true,
        latency_ms: u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
        pool: pool_stats(&state.pool),
    })
}

fn pool_stats(pool: &sqlx::PgPool) -> PoolStats {
    PoolStats {
        size: pool.size(),
        idle: u32::try_from(pool.num_idle()).unwrap_or(u32::MAX),
        max: pool.options().get_max_connections(),
    }
}
