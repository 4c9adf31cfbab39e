use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, Level};

mod domain;
mod rest;
mod storage;

use domain::{InsightService, ProductService};
use rest::AppState;
use storage::{JsonConnection, JsonProductRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up inventory store");
    let connection = JsonConnection::new_default()?;
    let repository = Arc::new(JsonProductRepository::new(connection));

    let product_service = ProductService::new(repository);
    let insight_service = InsightService::from_env()?;
    let state = AppState::new(product_service, insight_service);

    // CORS setup so a separately hosted frontend can make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", rest::api_routes(state))
        .fallback_service(ServeDir::new(PathBuf::from("static")))
        .layer(cors);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
