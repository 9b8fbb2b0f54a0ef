//! Dashboard statistics aggregation
//!
//! Everything here is a pure function of already-fetched records. Nothing is
//! cached; callers recompute on every view.

use crate::types::{
    DashboardRecords, Order, OrderStatus, Product, StatsSummary, StatusBreakdown, User,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Compute the dashboard summary from the three record sequences
///
/// Empty sequences yield zero counts. Revenue is the exact decimal sum of the
/// totals of `completed` orders; missing or unparseable totals count as zero.
/// Negative totals (refunds recorded as completed orders) are summed as-is,
/// so revenue is only non-negative when every completed total is.
#[must_use]
pub fn compute_stats(orders: &[Order], products: &[Product], users: &[User]) -> StatsSummary {
    let pending_orders = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Pending)
        .count();

    let total_revenue = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .map(Order::amount)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let summary = StatsSummary {
        total_orders: as_count(orders.len()),
        pending_orders: as_count(pending_orders),
        total_products: as_count(products.len()),
        total_users: as_count(users.len()),
        total_revenue,
    };

    debug!(
        total_orders = summary.total_orders,
        pending_orders = summary.pending_orders,
        total_products = summary.total_products,
        total_users = summary.total_users,
        total_revenue = %summary.total_revenue,
        "Computed dashboard statistics"
    );

    summary
}

/// Count orders per status tag
#[must_use]
pub fn count_by_status(orders: &[Order]) -> StatusBreakdown {
    orders
        .iter()
        .fold(StatusBreakdown::default(), |mut breakdown, order| {
            breakdown.record(order.status);
            breakdown
        })
}

impl DashboardRecords {
    /// Summarise the records, treating absent sequences as empty
    #[must_use]
    pub fn summarize(&self) -> StatsSummary {
        compute_stats(
            self.orders.as_deref().unwrap_or_default(),
            self.products.as_deref().unwrap_or_default(),
            self.users.as_deref().unwrap_or_default(),
        )
    }

    /// Per-status breakdown of the orders, empty when orders are absent
    #[must_use]
    pub fn status_breakdown(&self) -> StatusBreakdown {
        count_by_status(self.orders.as_deref().unwrap_or_default())
    }
}

fn as_count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}
