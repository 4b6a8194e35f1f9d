//! Document request and result types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /doc`.
///
/// `index` and `id` must be non-empty; `doc` may be any JSON object and is
/// stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertDocumentRequest {
    /// Target collection.
    pub index: String,
    /// Caller-supplied document identifier.
    pub id: String,
    /// Document body.
    pub doc: Map<String, Value>,
}

impl InsertDocumentRequest {
    /// Create a new insert request.
    pub fn new(index: impl Into<String>, id: impl Into<String>, doc: Map<String, Value>) -> Self {
        Self {
            index: index.into(),
            id: id.into(),
            doc,
        }
    }

    /// Name of the first required field that is empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.index.is_empty() {
            Some("index")
        } else if self.id.is_empty() {
            Some("id")
        } else {
            None
        }
    }
}

/// One retrieved record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source")]
    pub source: Map<String, Value>,
}

/// Inner `hits` object of a query result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitList {
    pub hits: Vec<DocumentHit>,
}

/// Result of a match-all query, shaped as `{"hits":{"hits":[...]}}`.
///
/// The same type is used to decode the backend response and to encode the
/// gateway response. Decoding fails as a whole if any hit lacks a string
/// `_id` or an object `_source`; fields outside that shape are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub hits: HitList,
}

impl QueryResult {
    /// Wrap hits in backend order.
    pub fn new(hits: Vec<DocumentHit>) -> Self {
        Self {
            hits: HitList { hits },
        }
    }

    /// Hits in backend order.
    pub fn hits(&self) -> &[DocumentHit] {
        &self.hits.hits
    }

    pub fn len(&self) -> usize {
        self.hits.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.hits.is_empty()
    }
}
