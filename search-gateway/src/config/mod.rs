//! Configuration and dependency wiring for the gateway.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{GatewayConfig, LogFormat};
