//! Interface definitions for the search backend.
//!
//! This module defines the abstract `SearchBackend` trait that allows the
//! gateway to be wired against a real cluster or an in-memory stand-in.

mod search_backend;

pub use search_backend::SearchBackend;
