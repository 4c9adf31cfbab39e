//! Product CRUD and inventory list handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::{CreateProductRequest, InventoryListResponse, StockFilter};
use tracing::info;

use super::mappers;
use super::AppState;
use crate::domain::product_service::ProductServiceError;

/// Query parameters for the inventory list endpoint.
#[derive(Deserialize, Debug)]
pub struct InventoryListQuery {
    pub search: Option<String>,
    pub filter: Option<StockFilter>,
}

/// Axum handler for GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<InventoryListQuery>,
) -> impl IntoResponse {
    info!("GET /api/products - query: {:?}", query);

    let search = query.search.unwrap_or_default();
    let filter = query.filter.unwrap_or_default();

    match state
        .product_service
        .inventory_view(&search, filter, Utc::now())
    {
        Ok(items) => {
            let response = InventoryListResponse {
                items: items
                    .iter()
                    .map(|(product, classification)| {
                        mappers::item_to_wire(product, *classification)
                    })
                    .collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// Axum handler for POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> impl IntoResponse {
    info!("POST /api/products - name: {}", request.name);

    match state.product_service.create_product(request, Utc::now()) {
        Ok(product) => {
            (StatusCode::CREATED, Json(mappers::product_to_wire(&product))).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// Axum handler for PUT /api/products/:id (full replacement)
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateProductRequest>,
) -> impl IntoResponse {
    info!("PUT /api/products/{}", id);

    match state.product_service.update_product(&id, request, Utc::now()) {
        Ok(product) => (StatusCode::OK, Json(mappers::product_to_wire(&product))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// Axum handler for DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/products/{}", id);

    match state.product_service.delete_product(&id) {
        Ok(remaining) => {
            let products: Vec<shared::Product> =
                remaining.iter().map(mappers::product_to_wire).collect();
            (StatusCode::OK, Json(products)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

fn service_error_response(error: ProductServiceError) -> Response {
    match error {
        ProductServiceError::Validation(e) => {
            info!("Rejected product request: {e}");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        ProductServiceError::NotFound(id) => {
            (StatusCode::NOT_FOUND, format!("Product not found: {id}")).into_response()
        }
        ProductServiceError::Storage(e) => {
            tracing::error!("Storage failure: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Storage unavailable").into_response()
        }
    }
}
