//! Record sources feeding the dashboard aggregator
//!
//! A fetch that fails is logged and reported as absent, so the aggregator only
//! ever sees present or absent sequences and never an error.

use async_trait::async_trait;
use shopdash_core::{DashboardRecords, Order, Product, Result, User};
use tracing::{debug, warn};

/// Anything that can deliver the three dashboard record sequences
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every order
    async fn fetch_orders(&self) -> Result<Vec<Order>>;

    /// Fetch every product
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Fetch every user profile
    async fn fetch_users(&self) -> Result<Vec<User>>;
}

/// Fetch all three sequences concurrently
///
/// Each failed fetch becomes `None`; the others are still returned. Nothing is
/// retried or cached.
pub async fn load_dashboard_records(source: &dyn RecordSource) -> DashboardRecords {
    let (orders, products, users) = tokio::join!(
        source.fetch_orders(),
        source.fetch_products(),
        source.fetch_users(),
    );

    let records = DashboardRecords {
        orders: present_or_absent("orders", orders),
        products: present_or_absent("products", products),
        users: present_or_absent("users", users),
    };

    debug!(
        orders_present = records.orders.is_some(),
        products_present = records.products.is_some(),
        users_present = records.users.is_some(),
        "Loaded dashboard records"
    );

    records
}

fn present_or_absent<T>(collection: &'static str, result: Result<Vec<T>>) -> Option<Vec<T>> {
    match result {
        Ok(rows) => Some(rows),
        Err(e) => {
            warn!(collection, error = %e, "Failed to fetch dashboard records, treating as empty");
            None
        }
    }
}
