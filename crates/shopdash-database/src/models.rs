//! Row models for the dashboard projections

use serde::{Deserialize, Serialize};
use shopdash_core::types::{Amount, Order, OrderStatus, Product, User};
use sqlx::FromRow;
use uuid::Uuid;

/// Projection of the `orders` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OrderRow {
    /// Order ID
    pub id: i64,

    /// Raw status tag
    pub status: String,

    /// Order total, rendered as text by the query
    pub total_amount: Option<String>,
}

/// Projection of the `products` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProductRow {
    /// Product ID
    pub id: i64,
}

/// Projection of the `profiles` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    /// Profile ID, shared with the auth user
    pub id: Uuid,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            status: OrderStatus::from_tag(&row.status),
            total_amount: row.total_amount.map(Amount::Text),
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self { id: row.id }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id.to_string(),
        }
    }
}
