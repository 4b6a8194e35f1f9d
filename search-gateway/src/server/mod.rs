//! HTTP server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/doc` | Insert `{index, id, doc}` with immediate visibility |
//! | `GET`  | `/docs?index=NAME` | Every document in one collection |
//! | `GET`  | `/alldocs` | Every document in every collection |
//! | `GET`  | `/ping` | Liveness probe, body `pong` |
//!
//! # CORS
//!
//! Every response allows any origin, `GET, POST, OPTIONS`, and the
//! `Content-Type` request header. `OPTIONS` on any path is answered with
//! 200 before routing.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::PING_RESPONSE;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Request,
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span};
use uuid::Uuid;

use crate::GatewayError;
use search_gateway_repository::SearchBackend;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// State shared with every handler.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn SearchBackend>,
}

/// Build the gateway router around `backend`.
pub fn build_router(backend: Arc<dyn SearchBackend>) -> Router {
    let state = AppState { backend };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %Uuid::new_v4(),
        )
    });

    Router::new()
        .route("/doc", post(handlers::insert_document))
        .route("/docs", get(handlers::query_collection))
        .route("/alldocs", get(handlers::query_all_collections))
        .route("/ping", get(handlers::ping))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(trace)
        .with_state(state)
}

/// Bind `bind_addr` and serve until a shutdown signal arrives.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve(bind_addr: SocketAddr, backend: Arc<dyn SearchBackend>) -> Result<(), GatewayError> {
    let app = build_router(backend);
    let listener = TcpListener::bind(bind_addr).await?;

    info!(addr = %listener.local_addr()?, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
