//! Dependency initialization and wiring for the gateway.

use std::sync::Arc;
use tracing::info;

use crate::config::GatewayConfig;
use crate::GatewayError;
use search_gateway_repository::{OpenSearchClient, SearchBackend};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Backend client shared by every request handler.
    pub backend: Arc<dyn SearchBackend>,
}

impl Dependencies {
    /// Build the backend client described by `config`.
    ///
    /// The backend is not contacted; a malformed URL is the only failure.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(GatewayError)` - If the backend client cannot be constructed
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        info!(
            backend_url = %config.backend.url,
            bind_addr = %config.bind_addr,
            "Initializing dependencies"
        );

        let client = OpenSearchClient::new(&config.backend).map_err(|e| {
            GatewayError::config(format!("Failed to create backend client: {}", e))
        })?;

        Ok(Self {
            backend: Arc::new(client),
        })
    }
}
