//! Search backend trait definition.

use async_trait::async_trait;

use crate::errors::SearchError;
use search_gateway_shared::{IndexTarget, InsertDocumentRequest, QueryResult};

/// Abstract interface for the operations the gateway forwards to its backend.
///
/// Implementations are created once at startup and shared by every request,
/// so they must be `Send + Sync` and must not require `&mut self`.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Store `request.doc` under `request.id` in `request.index`.
    ///
    /// An existing document with the same id is replaced. The write must be
    /// visible to the next read of the collection.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the backend accepted the document
    /// * `Err(SearchError)` - If the backend was unreachable or rejected it
    async fn index_document(&self, request: &InsertDocumentRequest) -> Result<(), SearchError>;

    /// Return every document in `target`, in backend order.
    ///
    /// # Returns
    ///
    /// * `Ok(QueryResult)` - All hits returned by the backend
    /// * `Err(SearchError::ParseError)` - If any hit did not match the expected shape
    /// * `Err(SearchError)` - If the backend was unreachable or rejected the query
    async fn match_all(&self, target: &IndexTarget) -> Result<QueryResult, SearchError>;
}
