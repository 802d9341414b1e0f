//! HTTP handlers for the chat page, chat API, status and animation

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};

use super::AppState;
use super::types::{API_VERSION, ChatRequest, ErrorResponse, StatusResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// The single chat page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Run one interaction: classify, then reply
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    match state.pipeline.analyze(&request.message).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(err) => {
            let (status, body) = ErrorResponse::from_pipeline(&err);
            (status, Json(body)).into_response()
        }
    }
}

/// Health check and status endpoint
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        model: state.pipeline.model_name().map(str::to_string),
        credential_configured: state.pipeline.is_configured(),
        animation_loaded: state.animation.is_some(),
        version: API_VERSION.to_string(),
    })
}

/// Loading animation JSON, if it was fetched at startup
pub async fn animation_handler(State(state): State<AppState>) -> Response {
    match &state.animation {
        Some(animation) => Json(animation.as_ref().clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
