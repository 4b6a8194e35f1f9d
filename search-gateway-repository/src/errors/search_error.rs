//! Search error types.
//!
//! This module defines the error types that can occur while talking to the
//! search backend.

use thiserror::Error;

/// Errors that can occur during search backend operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The backend client could not be built (e.g., malformed URL).
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request never produced a backend response (refused, reset, DNS).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The backend did not answer within the configured timeout.
    #[error("Backend timed out: {0}")]
    Timeout(String),

    /// The backend rejected an index request.
    #[error("Index error: {0}")]
    IndexError(String),

    /// The backend rejected a search request.
    #[error("Query error: {0}")]
    QueryError(String),

    /// The backend response did not match the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

impl From<opensearch::Error> for SearchError {
    fn from(err: opensearch::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::TransportError(err.to_string())
        }
    }
}
