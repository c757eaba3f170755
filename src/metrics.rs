//! Prometheus metrics for request counting and latency tracking.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Request body decode failures counter metric name.
pub const METRIC_DECODE_FAILURES: &str = "request_decode_failures_total";
/// Quotes computed counter metric name.
pub const METRIC_QUOTES_COMPUTED: &str = "quotes_computed_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total HTTP requests served, labeled by path"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request handling latency in milliseconds"
    );
    describe_counter!(
        METRIC_DECODE_FAILURES,
        "Total request bodies that failed to decode into an Item"
    );
    describe_counter!(
        METRIC_QUOTES_COMPUTED,
        "Total quotes computed by the pricing endpoint"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and return its scrape handle.
pub fn install_exporter() -> crate::error::Result<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// Count a completed request and record its handling latency.
pub fn record_request(start: Instant, path: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    counter!(METRIC_HTTP_REQUESTS, "path" => path.to_string()).increment(1);
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "path" => path.to_string()).record(latency_ms);
}

/// Increment the decode failure counter.
pub fn inc_decode_failures() {
    counter!(METRIC_DECODE_FAILURES).increment(1);
}

/// Increment the quotes computed counter.
pub fn inc_quotes_computed() {
    counter!(METRIC_QUOTES_COMPUTED).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_request_accepts_past_instants() {
        // Records against whatever recorder is installed (none in unit tests).
        let start = Instant::now();
        record_request(start, "/health");
    }
}
