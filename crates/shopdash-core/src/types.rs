//! Domain types for the admin dashboard

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle tag of an order
///
/// Tags are matched exactly and case-sensitively against their lower-case
/// wire form. Anything unrecognised becomes [`OrderStatus::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed but not yet handled
    Pending,
    /// Being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Fulfilled and paid
    Completed,
    /// Cancelled before fulfilment
    Cancelled,
    /// Money returned to the customer
    Refunded,
    /// Any tag this service does not know about
    #[serde(other)]
    Other,
}

impl OrderStatus {
    /// Map a raw status tag onto the known set
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "shipped" => Self::Shipped,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "refunded" => Self::Refunded,
            _ => Self::Other,
        }
    }

    /// Wire form of the tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monetary total exactly as the backing store delivered it
///
/// Stores hand out numeric columns either as JSON numbers or as strings, so
/// both are accepted and coerced lazily with [`Amount::to_decimal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A JSON number
    Number(f64),
    /// A decimal rendered as text, e.g. `"19.99"`
    Text(String),
}

impl Amount {
    /// Coerce to a decimal, yielding zero for anything that is not a finite number
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        match self {
            Self::Number(value) => decimal_from_f64(*value),
            Self::Text(text) => parse_decimal(text),
        }
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

fn parse_decimal(text: &str) -> Decimal {
    let trimmed = text.trim();
    // rust_decimal skips `_` digit separators; plain decimal text has none
    if trimmed.contains('_') {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

fn decimal_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }

    // Display prints the shortest representation that round-trips.
    parse_decimal(&value.to_string())
}

/// A purchase record, projected to the fields the dashboard reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: i64,

    /// Lifecycle tag
    pub status: OrderStatus,

    /// Order total; `None` when missing or null
    #[serde(default)]
    pub total_amount: Option<Amount>,
}

impl Order {
    /// Amount this order contributes to revenue when counted
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.total_amount
            .as_ref()
            .map_or(Decimal::ZERO, Amount::to_decimal)
    }
}

/// A catalogue product, projected to its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: i64,
}

/// A registered user, projected to its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier (auth UUID)
    pub id: String,
}

/// Derived dashboard metrics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Number of orders
    pub total_orders: u64,

    /// Number of orders tagged `pending`
    pub pending_orders: u64,

    /// Number of products
    pub total_products: u64,

    /// Number of users
    pub total_users: u64,

    /// Sum of totals over orders tagged `completed`
    pub total_revenue: Decimal,
}

impl StatsSummary {
    /// Revenue formatted with exactly two decimal places
    #[must_use]
    pub fn revenue_display(&self) -> String {
        let mut rounded = self
            .total_revenue
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }
}

/// Per-status order counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// `pending` orders
    pub pending: u64,
    /// `processing` orders
    pub processing: u64,
    /// `shipped` orders
    pub shipped: u64,
    /// `completed` orders
    pub completed: u64,
    /// `cancelled` orders
    pub cancelled: u64,
    /// `refunded` orders
    pub refunded: u64,
    /// Orders with an unrecognised tag
    pub other: u64,
}

impl StatusBreakdown {
    /// Count one order with the given status
    pub fn record(&mut self, status: OrderStatus) {
        let slot = match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Processing => &mut self.processing,
            OrderStatus::Shipped => &mut self.shipped,
            OrderStatus::Completed => &mut self.completed,
            OrderStatus::Cancelled => &mut self.cancelled,
            OrderStatus::Refunded => &mut self.refunded,
            OrderStatus::Other => &mut self.other,
        };
        *slot = slot.saturating_add(1);
    }

    /// Sum of all buckets
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.pending
            .saturating_add(self.processing)
            .saturating_add(self.shipped)
            .saturating_add(self.completed)
            .saturating_add(self.cancelled)
            .saturating_add(self.refunded)
            .saturating_add(self.other)
    }
}

/// The three record sequences backing one dashboard view
///
/// `None` marks a sequence the data-access layer could not supply; it is
/// summarised exactly like an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardRecords {
    /// Orders, if fetched
    pub orders: Option<Vec<Order>>,
    /// Products, if fetched
    pub products: Option<Vec<Product>>,
    /// Users, if fetched
    pub users: Option<Vec<User>>,
}
