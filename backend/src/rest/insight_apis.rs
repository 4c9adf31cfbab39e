//! AI insight handler.
//!
//! The provider response is an opaque HTML fragment passed through as-is.
//! Provider failure is a per-request degraded condition, never a crash: the
//! handler answers with a fixed user-visible message.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::InsightResponse;
use tracing::{info, warn};

use super::AppState;

/// Shown when the provider call fails or times out.
const PROVIDER_ERROR_MESSAGE: &str =
    "Ocurrió un error al conectar con el servicio de IA. Por favor intente más tarde.";

/// Axum handler for POST /api/insight
pub async fn generate_insight(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/insight");

    let products = match state.product_service.list_products() {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Error loading products for insight: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Storage unavailable").into_response();
        }
    };

    match state
        .insight_service
        .generate_inventory_insight(&products)
        .await
    {
        Ok(html) => (StatusCode::OK, Json(InsightResponse { html })).into_response(),
        Err(e) => {
            warn!("Insight provider unavailable: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(InsightResponse {
                    html: PROVIDER_ERROR_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}
