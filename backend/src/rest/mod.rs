//! REST boundary: the presentation layer talks to the core through these
//! routes and the DTOs in `shared`.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::domain::{InsightService, ProductService};
use crate::storage::JsonProductRepository;

pub mod dashboard_apis;
pub mod insight_apis;
pub mod mappers;
pub mod product_apis;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<JsonProductRepository>>,
    pub insight_service: Arc<InsightService>,
}

impl AppState {
    pub fn new(
        product_service: ProductService<JsonProductRepository>,
        insight_service: InsightService,
    ) -> Self {
        Self {
            product_service: Arc::new(product_service),
            insight_service: Arc::new(insight_service),
        }
    }
}

/// All /api routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(product_apis::list_products).post(product_apis::create_product),
        )
        .route(
            "/products/:id",
            put(product_apis::update_product).delete(product_apis::delete_product),
        )
        .route("/dashboard", get(dashboard_apis::get_dashboard))
        .route("/insight", post(insight_apis::generate_insight))
        .with_state(state)
}

/// Handler-test state over a temp-dir store and a credential-less insight
/// service.
#[cfg(test)]
pub fn test_state() -> (AppState, crate::storage::json::test_utils::TestEnvironment) {
    let env = crate::storage::json::test_utils::TestEnvironment::new()
        .expect("Failed to create test environment");
    let product_service = ProductService::new(Arc::new(env.repository()));
    let insight_service = InsightService::new(None).expect("Failed to build insight service");
    (AppState::new(product_service, insight_service), env)
}
