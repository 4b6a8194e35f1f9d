//! Route handlers.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::error::ApiError;
use super::AppState;
use search_gateway_shared::{IndexTarget, InsertDocumentRequest, QueryResult};

/// Body returned by `GET /ping`.
pub const PING_RESPONSE: &str = "pong";

/// Query string of `GET /docs`.
#[derive(Debug, Deserialize)]
pub struct CollectionParams {
    #[serde(default)]
    pub index: String,
}

/// Handler for `POST /doc`.
///
/// The body is decoded from raw bytes so that a missing or wrong
/// `Content-Type` does not change the outcome.
#[instrument(skip_all)]
pub async fn insert_document(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request: InsertDocumentRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid insert request: {}", e)))?;

    if let Some(field) = request.missing_field() {
        return Err(ApiError::bad_request(format!("{} is required", field)));
    }

    state.backend.index_document(&request).await?;

    debug!(index = %request.index, id = %request.id, "Document inserted");
    Ok(StatusCode::OK)
}

/// Handler for `GET /docs?index=NAME`.
#[instrument(skip_all)]
pub async fn query_collection(
    State(state): State<AppState>,
    Query(params): Query<CollectionParams>,
) -> Result<Json<QueryResult>, ApiError> {
    run_match_all(&state, IndexTarget::Named(params.index)).await
}

/// Handler for `GET /alldocs`.
#[instrument(skip_all)]
pub async fn query_all_collections(
    State(state): State<AppState>,
) -> Result<Json<QueryResult>, ApiError> {
    run_match_all(&state, IndexTarget::All).await
}

/// Handler for `GET /ping`. Never touches the backend.
pub async fn ping() -> &'static str {
    PING_RESPONSE
}

async fn run_match_all(state: &AppState, target: IndexTarget) -> Result<Json<QueryResult>, ApiError> {
    let result = state.backend.match_all(&target).await?;
    debug!(target = %target, hits = result.len(), "Query completed");
    Ok(Json(result))
}
