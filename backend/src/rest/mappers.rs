//! Conversions between domain types and the wire DTOs in `shared`.

use crate::domain::models::product::{Product, ProductStatus};
use crate::domain::product_service::DashboardView;
use crate::domain::valuation::{Classification, DashboardMetrics};

pub fn product_to_wire(product: &Product) -> shared::Product {
    shared::Product {
        id: product.id.clone(),
        name: product.name.clone(),
        sku: product.sku.clone(),
        category: product.category.clone(),
        supplier: product.supplier.clone(),
        purchase_date: product.purchase_date.to_rfc3339(),
        expiry_date: product.expiry_date.to_rfc3339(),
        quantity_store: product.quantity_store,
        quantity_warehouse: product.quantity_warehouse,
        price_cost: product.price_cost,
        price_sale: product.price_sale,
        alert_days_before_expiry: product.alert_days_before_expiry,
    }
}

pub fn status_to_wire(status: ProductStatus) -> shared::ProductStatus {
    match status {
        ProductStatus::Expired => shared::ProductStatus::Expired,
        ProductStatus::Expiring => shared::ProductStatus::Expiring,
        ProductStatus::LowStock => shared::ProductStatus::LowStock,
        ProductStatus::Ok => shared::ProductStatus::Ok,
    }
}

pub fn item_to_wire(product: &Product, classification: Classification) -> shared::InventoryItem {
    shared::InventoryItem {
        product: product_to_wire(product),
        status: status_to_wire(classification.status),
        days_until_expiry: classification.days_until_expiry,
    }
}

pub fn stats_to_wire(metrics: &DashboardMetrics) -> shared::DashboardStats {
    shared::DashboardStats {
        total_products: metrics.total_products,
        total_value: metrics.total_value,
        expiring_soon: metrics.expiring_soon,
        low_stock: metrics.low_stock,
    }
}

pub fn dashboard_to_wire(view: &DashboardView) -> shared::DashboardResponse {
    shared::DashboardResponse {
        stats: stats_to_wire(&view.metrics),
        categories: view
            .categories
            .iter()
            .map(|(name, quantity)| shared::CategoryQuantity {
                name: name.clone(),
                quantity: *quantity,
            })
            .collect(),
        expiry_alerts: view
            .expiry_alerts
            .iter()
            .map(|(product, classification)| item_to_wire(product, *classification))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn product_dates_map_to_rfc3339_strings() {
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap();
        let product = Product {
            id: "product::x".to_string(),
            name: "Leche".to_string(),
            sku: String::new(),
            category: "Lácteos".to_string(),
            supplier: String::new(),
            purchase_date: now,
            expiry_date: now + Duration::days(5),
            quantity_store: 10,
            quantity_warehouse: 40,
            price_cost: 0.8,
            price_sale: 1.2,
            alert_days_before_expiry: 7,
        };

        let wire = product_to_wire(&product);
        assert_eq!(wire.purchase_date, "2024-05-15T12:00:00+00:00");
        assert_eq!(wire.expiry_date, "2024-05-20T12:00:00+00:00");
        assert_eq!(wire.quantity_store, 10);
    }

    #[test]
    fn statuses_map_one_to_one() {
        assert_eq!(
            status_to_wire(ProductStatus::Expired),
            shared::ProductStatus::Expired
        );
        assert_eq!(
            status_to_wire(ProductStatus::LowStock),
            shared::ProductStatus::LowStock
        );
        assert_eq!(status_to_wire(ProductStatus::Ok), shared::ProductStatus::Ok);
    }
}
