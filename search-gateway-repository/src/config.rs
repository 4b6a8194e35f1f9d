//! Configuration types for the backend client.

use std::time::Duration;

/// Default backend endpoint.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9200";

/// Configuration for the backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Backend URL (e.g., "http://localhost:9200").
    pub url: String,
    /// Upper bound on a single backend request.
    /// Set to None to wait for the backend indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
            timeout: None,
        }
    }
}

impl BackendConfig {
    /// Create a config for the given URL with no request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Bound every backend request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
