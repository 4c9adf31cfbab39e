use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked product with parsed timestamps.
///
/// This is the domain-side counterpart of `shared::Product`; the serde names
/// match the wire/disk field names so the persisted document and the HTTP
/// payloads stay interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub category: String,
    #[serde(default)]
    pub supplier: String,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub quantity_store: u32,
    pub quantity_warehouse: u32,
    pub price_cost: f64,
    pub price_sale: f64,
    pub alert_days_before_expiry: u32,
}

impl Product {
    /// Units held across both locations. Widened so the sum cannot overflow
    /// even with both locations at capacity.
    pub fn total_quantity(&self) -> u64 {
        u64::from(self.quantity_store) + u64::from(self.quantity_warehouse)
    }

    /// Sale value of everything held: total quantity times sale price
    pub fn total_value(&self) -> f64 {
        self.total_quantity() as f64 * self.price_sale
    }
}

/// Single per-record display status; see `valuation::classify` for the
/// precedence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Expired,
    Expiring,
    LowStock,
    Ok,
}

/// Intake-time validation failures, rejected before a `Product` is built.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Expiry date is required")]
    MissingExpiryDate,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Quantity out of range: {0}")]
    QuantityOutOfRange(i64),
    #[error("Prices cannot be negative")]
    NegativePrice,
    #[error("Alert threshold out of range: {0}")]
    AlertDaysOutOfRange(i64),
}
