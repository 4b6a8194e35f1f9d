//! # Search Gateway Shared
//!
//! Data types exchanged between the HTTP layer and the search backend.
//! Everything here is request-scoped: built when a request arrives and
//! dropped once the response is written.

mod document;
mod target;

pub use document::{DocumentHit, HitList, InsertDocumentRequest, QueryResult};
pub use target::IndexTarget;
