//! JSON-file-backed product repository.
//!
//! The entire product list is one JSON document; every read parses the whole
//! file and every write rewrites it. On the very first read of a fresh data
//! directory the repository seeds a small illustrative dataset and persists
//! it before returning.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use super::connection::JsonConnection;
use crate::domain::models::product::Product;
use crate::storage::traits::{ProductStorage, StorageError};

#[derive(Clone)]
pub struct JsonProductRepository {
    connection: JsonConnection,
    // Serializes the read-modify-write cycles within this process. Two
    // separate processes on the same file can still lose updates; that is an
    // accepted limitation of the single-session model.
    lock: Arc<Mutex<()>>,
}

impl JsonProductRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self {
            connection,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read the whole list, seeding the bootstrap dataset on first access.
    fn read_products(&self) -> Result<Vec<Product>, StorageError> {
        let path = self.connection.inventory_file_path();

        if !path.exists() {
            let seeded = seed_products(Utc::now());
            info!(
                "No inventory file at {}, seeding {} bootstrap products",
                path.display(),
                seeded.len()
            );
            self.write_products(&seeded)?;
            return Ok(seeded);
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let products = serde_json::from_reader(reader)?;
        Ok(products)
    }

    /// Rewrite the whole document. A failure here means nothing was saved.
    fn write_products(&self, products: &[Product]) -> Result<(), StorageError> {
        let path = self.connection.inventory_file_path();
        let file = File::create(&path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, products)?;
        Ok(())
    }
}

impl ProductStorage for JsonProductRepository {
    fn list_all(&self) -> Result<Vec<Product>, StorageError> {
        let _guard = self.lock.lock().unwrap();
        self.read_products()
    }

    fn upsert(&self, product: &Product) -> Result<Vec<Product>, StorageError> {
        let _guard = self.lock.lock().unwrap();
        let mut products = self.read_products()?;

        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }

        self.write_products(&products)?;
        Ok(products)
    }

    fn remove(&self, id: &str) -> Result<Vec<Product>, StorageError> {
        let _guard = self.lock.lock().unwrap();
        let mut products = self.read_products()?;
        products.retain(|p| p.id != id);
        self.write_products(&products)?;
        Ok(products)
    }
}

/// The bootstrap dataset, mirroring the shop's demo inventory. Expiries are
/// relative to the seeding instant so the dashboard always has one live
/// alert to show.
fn seed_products(now: DateTime<Utc>) -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Leche Entera 1L".to_string(),
            sku: "DAI-001".to_string(),
            category: "Lácteos".to_string(),
            supplier: "Lácteos del Sur".to_string(),
            purchase_date: now - Duration::days(14),
            expiry_date: now + Duration::days(5),
            quantity_store: 10,
            quantity_warehouse: 40,
            price_cost: 0.80,
            price_sale: 1.20,
            alert_days_before_expiry: 7,
        },
        Product {
            id: "2".to_string(),
            name: "Arroz Premium 1kg".to_string(),
            sku: "GRN-002".to_string(),
            category: "Granos".to_string(),
            supplier: "Distribuidora Central".to_string(),
            purchase_date: now - Duration::days(30),
            expiry_date: now + Duration::days(365),
            quantity_store: 15,
            quantity_warehouse: 100,
            price_cost: 0.90,
            price_sale: 1.50,
            alert_days_before_expiry: 30,
        },
        Product {
            id: "3".to_string(),
            name: "Yogurt Fresa".to_string(),
            sku: "DAI-003".to_string(),
            category: "Lácteos".to_string(),
            supplier: "Lácteos del Sur".to_string(),
            purchase_date: now - Duration::days(5),
            expiry_date: now + Duration::days(2),
            quantity_store: 5,
            quantity_warehouse: 0,
            price_cost: 0.50,
            price_sale: 0.90,
            alert_days_before_expiry: 5,
        },
    ]
}
