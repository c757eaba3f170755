//! HTTP API route definitions.

use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{complex, health, metrics_scrape, simple, AppState};
use crate::metrics;

/// Create the API router.
///
/// The route table is built here once at startup and handed to the serve
/// call; nothing registers routes globally.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Benchmark endpoints
        .route("/health", get(health))
        .route("/simple", get(simple))
        .route("/complex", post(complex))
        // Operational endpoint, not part of the benchmark surface
        .route("/metrics", get(metrics_scrape))
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Count every request and record its handling latency.
async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    metrics::record_request(start, &path);
    response
}
