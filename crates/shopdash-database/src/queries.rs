//! Read-only projection queries behind the dashboard

use crate::models::{OrderRow, ProductRow, UserRow};
use shopdash_core::{Error, Result};
use sqlx::PgPool;

/// Order projection queries
pub struct OrderQueries;

impl OrderQueries {
    /// Fetch `id`, `status` and `total_amount` for every order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn fetch_projection(pool: &PgPool) -> Result<Vec<OrderRow>> {
        let query = "SELECT id, status, total_amount::TEXT AS total_amount FROM orders";

        sqlx::query_as::<_, OrderRow>(query)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Product projection queries
pub struct ProductQueries;

impl ProductQueries {
    /// Fetch the `id` of every product
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn fetch_projection(pool: &PgPool) -> Result<Vec<ProductRow>> {
        sqlx::query_as::<_, ProductRow>("SELECT id FROM products")
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Profile projection queries
pub struct UserQueries;

impl UserQueries {
    /// Fetch the `id` of every profile
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn fetch_projection(pool: &PgPool) -> Result<Vec<UserRow>> {
        sqlx::query_as::<_, UserRow>("SELECT id FROM profiles")
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }
}
