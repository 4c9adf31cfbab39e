//! Test infrastructure for storage-backed tests.
//!
//! RAII-based cleanup: the temp directory lives as long as the environment
//! and is removed even when a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::JsonConnection;
use super::product_repository::JsonProductRepository;

/// A temp-dir backed connection that cleans itself up on drop.
pub struct TestEnvironment {
    pub connection: JsonConnection,
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // keep alive to defer cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// A repository over this environment's connection.
    pub fn repository(&self) -> JsonProductRepository {
        JsonProductRepository::new(self.connection.clone())
    }
}
