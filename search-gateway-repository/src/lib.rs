//! # Search Gateway Repository
//!
//! This crate provides the trait the gateway uses to talk to its search
//! backend, the error type for backend operations, and a concrete
//! implementation for OpenSearch/Elasticsearch-compatible clusters.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use config::BackendConfig;
pub use errors::SearchError;
pub use interfaces::SearchBackend;
pub use opensearch::OpenSearchClient;
