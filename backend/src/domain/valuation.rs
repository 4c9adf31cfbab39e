//! Inventory valuation and expiry-risk rules.
//!
//! Pure functions over a snapshot of products. The reference instant is
//! always a parameter - nothing in here reads the clock - so every derived
//! value is deterministic and testable.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use shared::StockFilter;

use crate::domain::models::product::{Product, ProductStatus};

/// A product whose combined quantity is below this is flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 10;

const MS_PER_DAY: i64 = 86_400_000;

/// Signed whole days until expiry, rounded up.
///
/// Ceiling division means any positive remaining time counts as a day still
/// left: 36 hours out is 2 days, exactly 24 hours is 1 day, and an hour past
/// expiry is 0. Only a strictly negative result means the product expired on
/// a previous day.
pub fn days_until_expiry(expiry: DateTime<Utc>, reference: DateTime<Utc>) -> i64 {
    let diff_ms = expiry
        .signed_duration_since(reference)
        .num_milliseconds();
    let whole = diff_ms.div_euclid(MS_PER_DAY);
    if diff_ms.rem_euclid(MS_PER_DAY) != 0 {
        whole + 1
    } else {
        whole
    }
}

/// The derived risk facts for a single product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub status: ProductStatus,
    pub days_until_expiry: i64,
}

/// Classify a product into exactly one status.
///
/// Priority order, first match wins: expired, expiring within the product's
/// alert window, low stock, ok. Expiry risk deliberately dominates stock
/// risk - a low-stock product that is about to spoil must surface as
/// expiring.
pub fn classify(product: &Product, reference: DateTime<Utc>) -> Classification {
    let days = days_until_expiry(product.expiry_date, reference);

    let status = if days < 0 {
        ProductStatus::Expired
    } else if days <= i64::from(product.alert_days_before_expiry) {
        ProductStatus::Expiring
    } else if product.total_quantity() < LOW_STOCK_THRESHOLD {
        ProductStatus::LowStock
    } else {
        ProductStatus::Ok
    };

    Classification {
        status,
        days_until_expiry: days,
    }
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total_products: u64,
    pub total_value: f64,
    pub expiring_soon: u64,
    pub low_stock: u64,
}

/// Aggregate the whole snapshot into dashboard metrics.
///
/// `expiring_soon` uses the same threshold test as the per-record status and
/// therefore includes already-expired products. `low_stock` is counted
/// independently, so a product can appear in both counts even though
/// `classify` only ever reports one status for it.
pub fn aggregate_metrics(products: &[Product], reference: DateTime<Utc>) -> DashboardMetrics {
    let mut total_value = 0.0;
    let mut expiring_soon = 0;
    let mut low_stock = 0;

    for product in products {
        total_value += product.total_value();
        if is_expiry_risk(product, reference) {
            expiring_soon += 1;
        }
        if product.total_quantity() < LOW_STOCK_THRESHOLD {
            low_stock += 1;
        }
    }

    DashboardMetrics {
        total_products: products.len() as u64,
        total_value,
        expiring_soon,
        low_stock,
    }
}

/// Total units held per category label (exact string match).
pub fn category_distribution(products: &[Product]) -> HashMap<String, u64> {
    let mut distribution: HashMap<String, u64> = HashMap::new();
    for product in products {
        *distribution.entry(product.category.clone()).or_insert(0) +=
            product.total_quantity();
    }
    distribution
}

/// The most urgent expiry alerts, capped at `limit`.
///
/// Keeps products inside their alert window (expired included), sorted
/// ascending by days left so the most overdue come first. The sort is stable:
/// ties keep their original relative order.
pub fn expiry_alert_list<'a>(
    products: &'a [Product],
    reference: DateTime<Utc>,
    limit: usize,
) -> Vec<&'a Product> {
    let mut alerts: Vec<&Product> = products
        .iter()
        .filter(|p| is_expiry_risk(p, reference))
        .collect();
    alerts.sort_by_key(|p| days_until_expiry(p.expiry_date, reference));
    alerts.truncate(limit);
    alerts
}

/// Search by name or category and narrow to a risk bucket; both compose with
/// logical AND.
///
/// The search term matches case-insensitively as a substring against either
/// field; an empty term matches everything. `ExpiryRisk` keeps everything
/// inside its alert window - expired and expiring alike - not just products
/// already past their date.
pub fn search_and_filter<'a>(
    products: &'a [Product],
    search_term: &str,
    filter: StockFilter,
    reference: DateTime<Utc>,
) -> Vec<&'a Product> {
    let term = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term) || p.category.to_lowercase().contains(&term)
        })
        .filter(|p| match filter {
            StockFilter::All => true,
            StockFilter::ExpiryRisk => is_expiry_risk(p, reference),
            StockFilter::LowStock => p.total_quantity() < LOW_STOCK_THRESHOLD,
        })
        .collect()
}

fn is_expiry_risk(product: &Product, reference: DateTime<Utc>) -> bool {
    days_until_expiry(product.expiry_date, reference)
        <= i64::from(product.alert_days_before_expiry)
}
