//! Minimal JSON pricing API.
//!
//! This service is the Rust contestant in a cross-framework HTTP benchmark
//! (FastAPI, Express, Go net/http, Rust). It exposes the three endpoints the
//! shared k6 load script exercises:
//!
//! - `GET /health`: liveness probe
//! - `GET /simple`: static greeting, the minimal-work baseline
//! - `POST /complex`: decodes an item and returns its price quote
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`quote`]: Item and quote value types
//! - [`api`]: HTTP router and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod quote;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
