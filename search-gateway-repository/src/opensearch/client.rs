//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchBackend`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    params::Refresh,
    IndexParts, OpenSearch, SearchParts,
};
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::BackendConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchBackend;
use crate::opensearch::queries::match_all_query;
use search_gateway_shared::{IndexTarget, InsertDocumentRequest, QueryResult};

/// OpenSearch client implementation.
///
/// Holds a single connection pool to one node. Cloning is not needed: the
/// gateway wraps the client in an `Arc` and shares it across requests.
///
/// # Example
///
/// ```ignore
/// use search_gateway_repository::{BackendConfig, OpenSearchClient, SearchBackend};
/// use search_gateway_shared::IndexTarget;
///
/// let client = OpenSearchClient::new(&BackendConfig::new("http://localhost:9200"))?;
/// let result = client.match_all(&IndexTarget::All).await?;
/// println!("Found {} documents", result.len());
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new client for the configured backend URL.
    ///
    /// No request is sent; an unreachable backend only surfaces on the first
    /// call.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError::ConnectionError)` - If the URL is malformed or the transport cannot be built
    pub fn new(config: &BackendConfig) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(&config.url).map_err(|e| {
            SearchError::connection(format!("Invalid backend URL {}: {}", config.url, e))
        })?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %config.url,
            timeout = ?config.timeout,
            "Created OpenSearch client"
        );

        Ok(Self { client })
    }
}

#[async_trait]
impl SearchBackend for OpenSearchClient {
    /// Index a document with `refresh=true` so it is searchable on return.
    #[instrument(skip(self, request), fields(index = %request.index, id = %request.id))]
    async fn index_document(&self, request: &InsertDocumentRequest) -> Result<(), SearchError> {
        let response = self
            .client
            .index(IndexParts::IndexId(&request.index, &request.id))
            .body(&request.doc)
            .refresh(Refresh::True)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!("Document indexed");
        Ok(())
    }

    /// Run a match-all search with exact hit totals.
    ///
    /// An unnamed target is sent to `/_search` and scoped by the backend's
    /// own defaults.
    #[instrument(skip(self), fields(target = %target))]
    async fn match_all(&self, target: &IndexTarget) -> Result<QueryResult, SearchError> {
        let indices: Vec<&str> = target.as_path_expr().into_iter().collect();
        let parts = if indices.is_empty() {
            SearchParts::None
        } else {
            SearchParts::Index(&indices)
        };

        let response = self
            .client
            .search(parts)
            .body(match_all_query())
            .track_total_hits(true)
            .pretty(true)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let body = response.text().await?;
        let result: QueryResult = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Search response did not match the expected shape");
            SearchError::parse(e.to_string())
        })?;

        debug!(hits = result.len(), "Search completed");
        Ok(result)
    }
}
