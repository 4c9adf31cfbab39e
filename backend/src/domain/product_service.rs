//! Product intake and inventory views.
//!
//! Validation happens here, before a `Product` is ever constructed; the
//! valuation engine downstream assumes well-formed records. The storage
//! backend is injected so tests can run against a temp directory.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use shared::{CreateProductRequest, StockFilter};
use tracing::info;
use uuid::Uuid;

use crate::domain::models::product::{Product, ValidationError};
use crate::domain::valuation::{
    self, Classification, DashboardMetrics,
};
use crate::storage::traits::{ProductStorage, StorageError};

/// How many expiry alerts the dashboard shows.
const EXPIRY_ALERT_LIMIT: usize = 5;

/// Default alert window for products created without one.
const DEFAULT_ALERT_DAYS: u32 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ProductServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Product not found: {0}")]
    NotFound(String),
}

/// Everything the dashboard page needs, derived from one snapshot.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub metrics: DashboardMetrics,
    /// Category label and total units, sorted by label for stable display
    pub categories: Vec<(String, u64)>,
    pub expiry_alerts: Vec<(Product, Classification)>,
}

#[derive(Clone)]
pub struct ProductService<S: ProductStorage> {
    storage: Arc<S>,
}

impl<S: ProductStorage> ProductService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub fn list_products(&self) -> Result<Vec<Product>, ProductServiceError> {
        Ok(self.storage.list_all()?)
    }

    /// Intake: validate, assign an id, apply defaults, persist.
    pub fn create_product(
        &self,
        request: CreateProductRequest,
        now: DateTime<Utc>,
    ) -> Result<Product, ProductServiceError> {
        let id = format!("product::{}", Uuid::new_v4());
        let product = build_product(id, request, now)?;

        self.storage.upsert(&product)?;
        info!("Created product {} ({})", product.id, product.name);
        Ok(product)
    }

    /// Full replacement of an existing product; the id never changes.
    pub fn update_product(
        &self,
        id: &str,
        request: CreateProductRequest,
        now: DateTime<Utc>,
    ) -> Result<Product, ProductServiceError> {
        let exists = self.storage.list_all()?.iter().any(|p| p.id == id);
        if !exists {
            return Err(ProductServiceError::NotFound(id.to_string()));
        }

        let product = build_product(id.to_string(), request, now)?;
        self.storage.upsert(&product)?;
        info!("Updated product {} ({})", product.id, product.name);
        Ok(product)
    }

    /// Delete by id; deleting an absent id is a no-op.
    pub fn delete_product(&self, id: &str) -> Result<Vec<Product>, ProductServiceError> {
        let remaining = self.storage.remove(id)?;
        info!("Removed product {}, {} products remain", id, remaining.len());
        Ok(remaining)
    }

    /// The inventory list page: search and risk-bucket filter composed with
    /// AND, each surviving product paired with its classification.
    pub fn inventory_view(
        &self,
        search_term: &str,
        filter: StockFilter,
        reference: DateTime<Utc>,
    ) -> Result<Vec<(Product, Classification)>, ProductServiceError> {
        let products = self.storage.list_all()?;
        let view = valuation::search_and_filter(&products, search_term, filter, reference)
            .into_iter()
            .map(|p| (p.clone(), valuation::classify(p, reference)))
            .collect();
        Ok(view)
    }

    /// The dashboard page: aggregate metrics, category distribution and the
    /// most urgent expiry alerts.
    pub fn dashboard(&self, reference: DateTime<Utc>) -> Result<DashboardView, ProductServiceError> {
        let products = self.storage.list_all()?;

        let metrics = valuation::aggregate_metrics(&products, reference);

        let mut categories: Vec<(String, u64)> =
            valuation::category_distribution(&products).into_iter().collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));

        let expiry_alerts = valuation::expiry_alert_list(&products, reference, EXPIRY_ALERT_LIMIT)
            .into_iter()
            .map(|p| (p.clone(), valuation::classify(p, reference)))
            .collect();

        Ok(DashboardView {
            metrics,
            categories,
            expiry_alerts,
        })
    }
}

/// Validate an intake request and construct the record.
fn build_product(
    id: String,
    request: CreateProductRequest,
    now: DateTime<Utc>,
) -> Result<Product, ValidationError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if request.expiry_date.trim().is_empty() {
        return Err(ValidationError::MissingExpiryDate);
    }
    // Rejects negatives and anything too large to store, never truncates
    let quantity_store = u32::try_from(request.quantity_store)
        .map_err(|_| ValidationError::QuantityOutOfRange(request.quantity_store))?;
    let quantity_warehouse = u32::try_from(request.quantity_warehouse)
        .map_err(|_| ValidationError::QuantityOutOfRange(request.quantity_warehouse))?;
    // The negated comparison also rejects NaN
    if !(request.price_cost >= 0.0) || !(request.price_sale >= 0.0) {
        return Err(ValidationError::NegativePrice);
    }
    let alert_days = match request.alert_days_before_expiry {
        Some(days) => {
            u32::try_from(days).map_err(|_| ValidationError::AlertDaysOutOfRange(days))?
        }
        None => DEFAULT_ALERT_DAYS,
    };

    let expiry_date = parse_timestamp(&request.expiry_date)?;
    let purchase_date = match request.purchase_date.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_timestamp(raw)?,
        _ => now,
    };

    Ok(Product {
        id,
        name: request.name.trim().to_string(),
        sku: request.sku,
        category: request.category,
        supplier: request.supplier,
        purchase_date,
        expiry_date,
        quantity_store,
        quantity_warehouse,
        price_cost: request.price_cost,
        price_sale: request.price_sale,
        alert_days_before_expiry: alert_days,
    })
}

/// Parse a wire date: RFC 3339 first, then plain `YYYY-MM-DD` (midnight UTC),
/// which is what date-only form inputs produce.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
        return Ok(midnight.and_utc());
    }

    Err(ValidationError::InvalidDate(raw.to_string()))
}
