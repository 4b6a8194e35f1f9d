//! Gateway settings loaded from the environment.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::GatewayError;
use search_gateway_repository::config::DEFAULT_BACKEND_URL;
use search_gateway_repository::BackendConfig;

/// Default HTTP listen address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

const BACKEND_URL_VAR: &str = "ELASTICSEARCH_URL";
const BIND_ADDR_VAR: &str = "GATEWAY_BIND_ADDR";
const BACKEND_TIMEOUT_VAR: &str = "BACKEND_TIMEOUT_SECS";
const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, one line per event.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(GatewayError::config(format!(
                "Unknown {} '{}', expected 'pretty' or 'json'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

/// Everything the gateway needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Backend connection settings.
    pub backend: BackendConfig,
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Log output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_URL`: backend URL (default: http://localhost:9200)
    /// - `GATEWAY_BIND_ADDR`: listen address (default: 0.0.0.0:8080)
    /// - `BACKEND_TIMEOUT_SECS`: per-request backend timeout (default: none)
    /// - `LOG_FORMAT`: `pretty` or `json` (default: pretty)
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to their defaults, except the
    /// backend URL, which is taken as given whenever it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_url = lookup(BACKEND_URL_VAR).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let mut backend = BackendConfig::new(backend_url);

        if let Some(raw) = non_empty(BACKEND_TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                GatewayError::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    BACKEND_TIMEOUT_VAR, raw
                ))
            })?;
            if secs == 0 {
                return Err(GatewayError::config(format!(
                    "{} must be greater than zero",
                    BACKEND_TIMEOUT_VAR
                )));
            }
            backend = backend.with_timeout(Duration::from_secs(secs));
        }

        let bind_raw = non_empty(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.trim().parse().map_err(|e| {
            GatewayError::config(format!("Invalid {} '{}': {}", BIND_ADDR_VAR, bind_raw, e))
        })?;

        let log_format = match non_empty(LOG_FORMAT_VAR) {
            Some(raw) => raw.trim().parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            backend,
            bind_addr,
            log_format,
        })
    }
}
