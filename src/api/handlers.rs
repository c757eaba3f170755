//! HTTP API handlers.

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::warn;

use crate::metrics;
use crate::quote::{Item, Quote};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Scrape handle for the installed Prometheus recorder.
    pub prometheus: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(prometheus: PrometheusHandle) -> Self {
        Self { prometheus }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
}

/// Greeting response for the minimal-work endpoint.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    /// Fixed greeting message.
    pub message: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

/// Static greeting handler - the benchmark's minimal-work baseline.
pub async fn simple() -> impl IntoResponse {
    Json(GreetingResponse {
        message: "Hello, World!",
    })
}

/// Pricing handler - decodes an Item from the body and returns its quote.
///
/// A body that fails to decode falls back to the zero-value `Item`, so the
/// response is still 200 with an empty, zero-priced quote. This mirrors the
/// other benchmark contestants, which ignore decode errors the same way. The
/// failure is logged and counted rather than surfaced to the client.
pub async fn complex(body: Bytes) -> impl IntoResponse {
    let item = match serde_json::from_slice::<Item>(&body) {
        Ok(item) => item,
        Err(e) => {
            warn!("Failed to decode item body, using defaults: {}", e);
            metrics::inc_decode_failures();
            Item::default()
        }
    };

    metrics::inc_quotes_computed();
    Json(Quote::for_item(item))
}

/// Prometheus scrape handler.
pub async fn metrics_scrape(State(state): State<AppState>) -> String {
    state.prometheus.render()
}
