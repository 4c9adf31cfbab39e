//! AI inventory insight via the Gemini REST API (no SDK dependency).
//!
//! A single opaque remote call: the product list is projected down to a
//! compact summary, embedded in a fixed analyst prompt, and the response
//! text is returned verbatim as an HTML fragment. No retries, no
//! deduplication of overlapping calls.

use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use tracing::{error, info};

use crate::domain::models::product::Product;

const GEMINI_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shown when no credential is configured; a degraded answer, not an error.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "API Key no configurada. No se puede realizar el análisis IA.";

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("Insight provider unavailable: {0}")]
    ProviderUnavailable(String),
}

pub struct InsightService {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl InsightService {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, api_key })
    }

    /// Read the credential from `GEMINI_API_KEY`; absence degrades the
    /// service instead of failing it.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            info!("GEMINI_API_KEY not set, insight generation will be degraded");
        }
        Self::new(api_key)
    }

    /// Ask the provider for a strategic summary of the inventory.
    ///
    /// Returns an HTML fragment the caller renders as-is; this layer never
    /// parses or validates its structure.
    pub async fn generate_inventory_insight(
        &self,
        products: &[Product],
    ) -> Result<String, InsightError> {
        let Some(api_key) = &self.api_key else {
            return Ok(NOT_CONFIGURED_MESSAGE.to_string());
        };

        let prompt = build_prompt(products);
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{GEMINI_MODEL}:generateContent"
        );

        let response: serde_json::Value = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("Insight request failed: {e}");
                InsightError::ProviderUnavailable(e.to_string())
            })?
            .json()
            .await
            .map_err(|e| InsightError::ProviderUnavailable(e.to_string()))?;

        response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| {
                error!("Insight response had no text candidate: {response}");
                InsightError::ProviderUnavailable("empty response from provider".to_string())
            })
    }
}

/// Compact per-record projection sent to the provider, to keep the prompt
/// small: name, combined quantity, expiry, sale value and category.
fn project_records(products: &[Product]) -> serde_json::Value {
    let summary: Vec<serde_json::Value> = products
        .iter()
        .map(|p| {
            json!({
                "item": p.name,
                "totalQty": p.total_quantity(),
                "expiry": p.expiry_date.to_rfc3339(),
                "value": p.total_value(),
                "category": p.category,
            })
        })
        .collect();
    serde_json::Value::Array(summary)
}

fn build_prompt(products: &[Product]) -> String {
    let data = project_records(products);
    format!(
        "Actúa como un analista experto de inventario para una tienda minorista.\n\
         Analiza los siguientes datos de inventario en formato JSON.\n\n\
         Datos: {data}\n\n\
         Proporciona un resumen estratégico en formato HTML simple (sin etiquetas \
         html/body, solo p, ul, li, strong) cubriendo:\n\
         1. Productos en riesgo crítico de caducidad (Sugiere acciones como descuentos).\n\
         2. Productos con sobrestock o bajo movimiento aparente.\n\
         3. Valor total del inventario en riesgo.\n\
         4. Recomendación de compra basada en categorías.\n\n\
         Sé conciso, directo y útil para el dueño del negocio."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn product(name: &str, qty: u32, price_sale: f64) -> Product {
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 0, 0, 0).unwrap();
        Product {
            id: format!("product::{name}"),
            name: name.to_string(),
            sku: String::new(),
            category: "Lácteos".to_string(),
            supplier: String::new(),
            purchase_date: now,
            expiry_date: now + Duration::days(30),
            quantity_store: qty,
            quantity_warehouse: 0,
            price_cost: 1.0,
            price_sale,
            alert_days_before_expiry: 30,
        }
    }

    #[tokio::test]
    async fn missing_credential_returns_fixed_message_without_calling_out() {
        let service = InsightService::new(None).expect("Failed to build insight service");
        let result = service
            .generate_inventory_insight(&[product("Leche", 10, 1.2)])
            .await
            .unwrap();
        assert_eq!(result, NOT_CONFIGURED_MESSAGE);
    }

    #[test]
    fn projection_carries_the_compact_fields() {
        let projected = project_records(&[product("Leche", 10, 1.2)]);
        let entry = &projected[0];
        assert_eq!(entry["item"], "Leche");
        assert_eq!(entry["totalQty"], 10);
        assert_eq!(entry["category"], "Lácteos");
        assert!((entry["value"].as_f64().unwrap() - 12.0).abs() < 1e-9);
        assert!(entry["expiry"].as_str().unwrap().starts_with("2024-06-14"));
    }

    #[test]
    fn prompt_embeds_the_projection() {
        let prompt = build_prompt(&[product("Arroz", 115, 1.5)]);
        assert!(prompt.contains("\"item\":\"Arroz\""));
        assert!(prompt.contains("resumen estratégico"));
    }
}
