use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// JsonConnection manages the data directory the inventory document lives in.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

const INVENTORY_FILE: &str = "inventory.json";

impl JsonConnection {
    /// Create a connection rooted at the given directory, creating it if
    /// needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory.
    ///
    /// `INVENTORY_DATA_DIR` wins when set; otherwise the data lives under
    /// the user's Documents folder.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("INVENTORY_DATA_DIR") {
            info!("Using data directory from INVENTORY_DATA_DIR: {}", dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Inventory Tracker");
        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Path of the single JSON document holding the whole product list.
    pub fn inventory_file_path(&self) -> PathBuf {
        self.base_directory.join(INVENTORY_FILE)
    }
}
