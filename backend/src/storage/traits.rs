//! Storage abstraction for the product list.
//!
//! The domain layer only sees this trait, so tests can substitute an
//! in-memory or temp-dir backed store for the real one.

use crate::domain::models::product::Product;

/// Failures of the persistence medium. Every variant is a per-operation
/// condition the caller reports to the user; none is fatal.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
    #[error("Stored inventory is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The record store: the whole product list is the unit of read and write.
///
/// Callers must not assume any particular ordering of the returned lists.
/// A failed `upsert` means the save did not happen - there is no partial
/// persistence to account for.
pub trait ProductStorage: Send + Sync {
    /// Every current product.
    fn list_all(&self) -> Result<Vec<Product>, StorageError>;

    /// Replace the product with the same id, or append if the id is new.
    /// Returns the full updated list.
    fn upsert(&self, product: &Product) -> Result<Vec<Product>, StorageError>;

    /// Remove the product with the given id. A missing id is a no-op, not an
    /// error. Returns the full updated list.
    fn remove(&self, id: &str) -> Result<Vec<Product>, StorageError>;
}
