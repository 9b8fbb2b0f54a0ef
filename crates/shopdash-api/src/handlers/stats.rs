//! Admin dashboard statistics endpoint

use crate::{handlers::ErrorResponse, state::AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use shopdash_core::{StatsSummary, StatusBreakdown};
use shopdash_database::load_dashboard_records;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// Query parameters for the dashboard statistics
#[derive(Debug, Default, Deserialize, Validate)]
pub struct StatsQuery {
    /// Include per-status order counts (`true`/`false`/`1`/`0`)
    #[validate(custom(function = "validate_flag"))]
    pub include_breakdown: Option<String>,
}

impl StatsQuery {
    /// Whether the caller asked for the status breakdown
    #[must_use]
    pub fn wants_breakdown(&self) -> bool {
        matches!(self.include_breakdown.as_deref(), Some("true" | "1"))
    }
}

/// Dashboard statistics response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResponse {
    /// Headline counts and revenue
    pub summary: StatsSummary,

    /// Revenue formatted with two decimal places
    pub total_revenue_display: String,

    /// Per-status order counts (if requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_breakdown: Option<StatusBreakdown>,

    /// Statistics generation timestamp
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Compute the admin dashboard summary
///
/// Records are re-fetched on every call. A collection that cannot be fetched
/// counts as empty, so this endpoint answers `200` even when the database is
/// unavailable.
///
/// # Errors
///
/// Returns `400` with `INVALID_PARAMETERS` if the query string is invalid.
pub async fn get_admin_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<AdminStatsResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(validation_errors) = query.validate() {
        warn!("Invalid query parameters: {:?}", validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid query parameters".to_string(),
                code: "INVALID_PARAMETERS".to_string(),
                details: Some(serde_json::json!(validation_errors)),
            }),
        ));
    }

    let records = load_dashboard_records(state.source.as_ref()).await;
    let summary = records.summarize();
    let status_breakdown = query
        .wants_breakdown()
        .then(|| records.status_breakdown());

    info!(
        total_orders = summary.total_orders,
        pending_orders = summary.pending_orders,
        "Computed admin dashboard statistics"
    );

    Ok(Json(AdminStatsResponse {
        total_revenue_display: summary.revenue_display(),
        summary,
        status_breakdown,
        generated_at: chrono::Utc::now(),
    }))
}

fn validate_flag(flag: &str) -> Result<(), validator::ValidationError> {
    match flag {
        "true" | "false" | "1" | "0" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_flag")),
    }
}
