//! OpenSearch query builders.

use serde_json::{json, Value};

/// Build a query body that matches every document in the target.
pub fn match_all_query() -> Value {
    json!({
        "query": {
            "match_all": {}
        }
    })
}
