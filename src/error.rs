//! Unified error types for the pricing API.

use thiserror::Error;

/// Unified error type for the pricing API.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Prometheus recorder could not be installed.
    #[error("metrics exporter error: {0}")]
    MetricsExporter(#[from] metrics_exporter_prometheus::BuildError),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
