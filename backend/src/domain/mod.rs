pub mod insight_service;
pub mod models;
pub mod product_service;
pub mod valuation;

pub use insight_service::{InsightError, InsightService};
pub use product_service::{ProductService, ProductServiceError};
