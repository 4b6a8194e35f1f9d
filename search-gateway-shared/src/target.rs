//! Query targets.

use std::fmt;

/// Which collections a query is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexTarget {
    /// A single named collection. The name is passed through unvalidated and
    /// may be empty, in which case the backend applies its default targeting.
    Named(String),
    /// Every collection the backend knows about.
    All,
}

impl IndexTarget {
    /// Wildcard expression understood by the backend for "every index".
    pub const WILDCARD: &'static str = "*";

    /// Create a target for a single collection.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The index expression to place in the request path, or `None` when the
    /// request should be sent untargeted.
    pub fn as_path_expr(&self) -> Option<&str> {
        match self {
            Self::Named(name) if name.is_empty() => None,
            Self::Named(name) => Some(name.as_str()),
            Self::All => Some(Self::WILDCARD),
        }
    }
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::All => f.write_str(Self::WILDCARD),
        }
    }
}
