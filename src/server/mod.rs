//! HTTP server for the chat page
//!
//! Endpoints:
//! - GET /               - Chat page
//! - POST /api/chat      - Classify a message and reply to it
//! - GET /api/status     - Health check
//! - GET /api/animation  - Loading animation JSON (404 when unavailable)

mod handlers;
pub mod types;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::pipeline::ChatPipeline;

pub use types::API_VERSION;

// ============================================================================
// Server State
// ============================================================================

/// Shared, read-only state; each request works on its own data
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ChatPipeline>,
    pub animation: Option<Arc<Value>>,
}

impl AppState {
    pub fn new(pipeline: ChatPipeline, animation: Option<Value>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            animation: animation.map(Arc::new),
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // API version header on all responses
    let version_header = SetResponseHeaderLayer::if_not_present(
        header::HeaderName::from_static("x-api-version"),
        HeaderValue::from_static(API_VERSION),
    );

    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/api/chat", post(handlers::chat_handler))
        .route("/api/status", get(handlers::status_handler))
        .route("/api/animation", get(handlers::animation_handler))
        .layer(version_header)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until it fails
pub async fn run(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_router(state.clone());

    info!("Server listening on http://{}", addr);
    info!(
        "Model:        {}",
        state.pipeline.model_name().unwrap_or("unavailable (no API key)")
    );
    info!(
        "Animation:    {}",
        if state.animation.is_some() { "loaded" } else { "spinner fallback" }
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
