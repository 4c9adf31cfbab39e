use serde::{Deserialize, Serialize};

/// A tracked product as it travels over the wire and sits on disk.
///
/// Dates are RFC 3339 strings at this boundary; the backend parses them into
/// proper timestamps before any date math happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, assigned at creation, immutable
    pub id: String,
    /// Display name (non-empty)
    pub name: String,
    /// Optional free-text stock code
    #[serde(default)]
    pub sku: String,
    /// Free-text grouping label
    pub category: String,
    /// Optional free-text supplier name
    #[serde(default)]
    pub supplier: String,
    /// Purchase timestamp (RFC 3339)
    pub purchase_date: String,
    /// Expiry timestamp (RFC 3339)
    pub expiry_date: String,
    /// Units held at the store location
    pub quantity_store: u32,
    /// Units held at the warehouse location
    pub quantity_warehouse: u32,
    /// Unit cost price
    pub price_cost: f64,
    /// Unit sale price
    pub price_sale: f64,
    /// Days before expiry at which this product starts alerting
    pub alert_days_before_expiry: u32,
}

/// Intake payload for creating a product (also used for full-replacement
/// updates, where the id comes from the URL).
///
/// Quantities and prices are signed here so the backend can reject negative
/// input with a proper validation error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub category: String,
    #[serde(default)]
    pub supplier: String,
    /// Optional purchase timestamp (RFC 3339 or YYYY-MM-DD) - defaults to now
    pub purchase_date: Option<String>,
    /// Expiry timestamp (RFC 3339 or YYYY-MM-DD) - required
    pub expiry_date: String,
    pub quantity_store: i64,
    pub quantity_warehouse: i64,
    pub price_cost: f64,
    pub price_sale: f64,
    /// Alert threshold in days - defaults to 30
    pub alert_days_before_expiry: Option<i64>,
}

/// Display status of a product, exactly one per record.
///
/// Expiry risk dominates stock-level risk: a low-stock product that is also
/// expiring surfaces as expiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Expired,
    Expiring,
    LowStock,
    Ok,
}

/// Inventory list filter buckets.
///
/// `ExpiryRisk` is a risk bucket, not "already expired": it contains both
/// expired and expiring-soon products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockFilter {
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "EXPIRED_RISK")]
    ExpiryRisk,
    #[serde(rename = "LOW_STOCK")]
    LowStock,
}

impl Default for StockFilter {
    fn default() -> Self {
        StockFilter::All
    }
}

/// One row of the inventory list: the product plus its derived risk facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product: Product,
    pub status: ProductStatus,
    /// Signed days until expiry; negative means already expired
    pub days_until_expiry: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryListResponse {
    pub items: Vec<InventoryItem>,
}

/// Headline dashboard metrics.
///
/// `expiring_soon` and `low_stock` are independent counts and may both
/// include the same product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_value: f64,
    pub expiring_soon: u64,
    pub low_stock: u64,
}

/// Total units held per category, for the distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuantity {
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub categories: Vec<CategoryQuantity>,
    /// Most urgent expiry alerts, most negative days first
    pub expiry_alerts: Vec<InventoryItem>,
}

/// Insight response: an opaque HTML fragment produced by the AI provider
/// (or a fixed degraded message when the provider is not configured).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_camel_case_field_names() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Leche Entera 1L".to_string(),
            sku: "DAI-001".to_string(),
            category: "Lácteos".to_string(),
            supplier: "Lácteos del Sur".to_string(),
            purchase_date: "2024-05-01T00:00:00Z".to_string(),
            expiry_date: "2024-05-20T00:00:00Z".to_string(),
            quantity_store: 10,
            quantity_warehouse: 40,
            price_cost: 0.80,
            price_sale: 1.20,
            alert_days_before_expiry: 7,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["quantityStore"], 10);
        assert_eq!(json["quantityWarehouse"], 40);
        assert_eq!(json["priceSale"], 1.20);
        assert_eq!(json["alertDaysBeforeExpiry"], 7);
        assert_eq!(json["expiryDate"], "2024-05-20T00:00:00Z");
    }

    #[test]
    fn product_round_trips_through_json() {
        let product = Product {
            id: "p-2".to_string(),
            name: "Arroz Premium 1kg".to_string(),
            sku: "GRN-002".to_string(),
            category: "Granos".to_string(),
            supplier: "Distribuidora Central".to_string(),
            purchase_date: "2024-04-15T00:00:00Z".to_string(),
            expiry_date: "2025-04-15T00:00:00Z".to_string(),
            quantity_store: 15,
            quantity_warehouse: 100,
            price_cost: 0.90,
            price_sale: 1.50,
            alert_days_before_expiry: 30,
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn status_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::LowStock).unwrap(),
            "\"LOW_STOCK\""
        );
        assert_eq!(
            serde_json::to_string(&ProductStatus::Expired).unwrap(),
            "\"EXPIRED\""
        );
    }

    #[test]
    fn stock_filter_parses_wire_names() {
        let filter: StockFilter = serde_json::from_str("\"EXPIRED_RISK\"").unwrap();
        assert_eq!(filter, StockFilter::ExpiryRisk);
        assert_eq!(StockFilter::default(), StockFilter::All);
    }

    #[test]
    fn create_request_defaults_optional_text_fields() {
        let json = r#"{
            "name": "Yogurt Fresa",
            "category": "Lácteos",
            "expiryDate": "2024-06-01",
            "quantityStore": 5,
            "quantityWarehouse": 0,
            "priceCost": 0.5,
            "priceSale": 0.9
        }"#;

        let request: CreateProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.sku, "");
        assert_eq!(request.supplier, "");
        assert_eq!(request.purchase_date, None);
        assert_eq!(request.alert_days_before_expiry, None);
    }
}
