//! OpenSearch implementation of the search backend.
//!
//! This module provides a concrete implementation of `SearchBackend` using
//! the OpenSearch REST client. The same wire protocol is spoken by
//! Elasticsearch, so either cluster can sit behind the gateway.

mod client;
mod queries;

pub use client::OpenSearchClient;
pub use queries::match_all_query;
