pub mod json;
pub mod traits;

pub use json::{JsonConnection, JsonProductRepository};
pub use traits::{ProductStorage, StorageError};
