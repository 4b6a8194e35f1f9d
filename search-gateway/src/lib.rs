//! # Search Gateway
//!
//! HTTP front end for a search cluster. Documents are inserted with
//! `POST /doc` and listed with `GET /docs` (one collection) or
//! `GET /alldocs` (every collection); `GET /ping` is a liveness probe.
//!
//! The crate holds configuration loading, dependency wiring, logging setup
//! and the axum router. Backend access lives in `search-gateway-repository`.

pub mod config;
pub mod server;
pub mod telemetry;

pub use config::{Dependencies, GatewayConfig, LogFormat};
pub use server::build_router;

use thiserror::Error;

/// Errors that can occur during gateway startup or while serving.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search backend error.
    #[error("Search error: {0}")]
    SearchError(#[from] search_gateway_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GatewayError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
