//! Dashboard handler: aggregate metrics, category distribution, expiry
//! alerts - all derived from one snapshot at request time.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tracing::info;

use super::mappers;
use super::AppState;

/// Axum handler for GET /api/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dashboard");

    match state.product_service.dashboard(Utc::now()) {
        Ok(view) => (StatusCode::OK, Json(mappers::dashboard_to_wire(&view))).into_response(),
        Err(e) => {
            tracing::error!("Error building dashboard: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error building dashboard").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_state;

    #[tokio::test]
    async fn dashboard_returns_ok_on_seeded_store() {
        let (state, _env) = test_state();
        let response = get_dashboard(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
