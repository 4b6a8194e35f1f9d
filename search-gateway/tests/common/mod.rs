//! In-memory backend and request helpers shared by the router tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use tokio::sync::Mutex;
use tower::ServiceExt;

use search_gateway::build_router;
use search_gateway_repository::{SearchBackend, SearchError};
use search_gateway_shared::{DocumentHit, IndexTarget, InsertDocumentRequest, QueryResult};

/// Failure the mock backend should simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Every call fails as if the connection was refused.
    Unreachable,
    /// Queries fail as if a hit was missing `_source`.
    MalformedResponse,
}

/// Mock backend keeping collections in insertion order.
#[derive(Default)]
pub struct MockBackend {
    collections: Mutex<Vec<(String, Vec<DocumentHit>)>>,
    calls: AtomicUsize,
    failure: Option<Failure>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(failure: Failure) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(failure),
            ..Default::default()
        })
    }

    /// Number of backend calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    async fn index_document(&self, request: &InsertDocumentRequest) -> Result<(), SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failure == Some(Failure::Unreachable) {
            return Err(SearchError::TransportError("connection refused".to_string()));
        }

        let hit = DocumentHit {
            id: request.id.clone(),
            source: request.doc.clone(),
        };

        let mut collections = self.collections.lock().await;
        match collections.iter_mut().find(|(name, _)| *name == request.index) {
            Some((_, hits)) => match hits.iter_mut().find(|h| h.id == hit.id) {
                Some(existing) => *existing = hit,
                None => hits.push(hit),
            },
            None => collections.push((request.index.clone(), vec![hit])),
        }
        Ok(())
    }

    async fn match_all(&self, target: &IndexTarget) -> Result<QueryResult, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(Failure::Unreachable) => {
                return Err(SearchError::TransportError("connection refused".to_string()))
            }
            Some(Failure::MalformedResponse) => {
                return Err(SearchError::parse("missing field `_source`"))
            }
            None => {}
        }

        let collections = self.collections.lock().await;
        let hits = collections
            .iter()
            .filter(|(name, _)| match target.as_path_expr() {
                Some(IndexTarget::WILDCARD) | None => true,
                Some(expr) => name == expr,
            })
            .flat_map(|(_, hits)| hits.iter().cloned())
            .collect();

        Ok(QueryResult::new(hits))
    }
}

/// Build a router around `backend`.
pub fn app(backend: Arc<dyn SearchBackend>) -> Router {
    build_router(backend)
}

/// Send one request through a fresh router.
pub async fn send(
    backend: Arc<dyn SearchBackend>,
    request: Request<Body>,
) -> (StatusCode, HeaderMap, Bytes) {
    let response = app(backend).oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
