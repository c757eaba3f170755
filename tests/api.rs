//! End-to-end tests for the pricing API.
//!
//! Each test binds the real router to an ephemeral port and drives it over
//! HTTP with reqwest, the same way the k6 benchmark script exercises the
//! service.

use metrics_exporter_prometheus::PrometheusBuilder;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use pricing_api::api::{create_router, AppState};

/// Spawn the service on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let state = AppState::new(PrometheusBuilder::new().build_recorder().handle());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server error");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn health_returns_healthy() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn simple_returns_greeting() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/simple", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Hello, World!"}));
}

#[tokio::test]
async fn complex_computes_total_price() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/complex", base))
        .json(&json!({"name": "Widget", "price": 2.5, "quantity": 4}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "item_name": "Widget",
            "total_price": 10.0,
            "status": "processed",
        })
    );
}

#[tokio::test]
async fn complex_handles_zero_price() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/complex", base))
        .json(&json!({"name": "Free", "price": 0.0, "quantity": 100}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "item_name": "Free",
            "total_price": 0.0,
            "status": "processed",
        })
    );
}

#[tokio::test]
async fn complex_accepts_negative_values_silently() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/complex", base))
        .json(&json!({"name": "Refund", "price": -2.0, "quantity": 3}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "item_name": "Refund",
            "total_price": -6.0,
            "status": "processed",
        })
    );
}

#[tokio::test]
async fn complex_returns_default_quote_for_malformed_body() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/complex", base))
        .header("content-type", "application/json")
        .body("{{{ definitely not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "item_name": "",
            "total_price": 0.0,
            "status": "processed",
        })
    );
}

#[tokio::test]
async fn complex_returns_default_quote_for_empty_body() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/complex", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "item_name": "",
            "total_price": 0.0,
            "status": "processed",
        })
    );
}

#[tokio::test]
async fn metrics_endpoint_is_scrapeable() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/metrics", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    // The test recorder is not installed globally, so the rendered text may
    // be empty; the endpoint itself must still answer.
    let _ = response.text().await.unwrap();
}
