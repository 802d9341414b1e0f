// tests/chat_api.rs
// HTTP API tests: chat scenarios, status, page and animation endpoints


use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sentiment_chat::server::types::{ErrorResponse, GENERIC_WARNING, MISSING_KEY_WARNING, StatusResponse};
use sentiment_chat::server::{AppState, create_router};
use sentiment_chat::{ChatPipeline, SentimentCategory, SentimentError};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use test_helpers::ScriptedModel;
use tower::ServiceExt;

fn app_with(model: Arc<ScriptedModel>) -> axum::Router {
    create_router(AppState::new(ChatPipeline::new(model), None))
}

async fn post_chat(app: axum::Router, message: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "message": message }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn decode<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Chat scenarios
// ============================================================================

#[tokio::test]
async fn test_positive_message() {
    let model = Arc::new(ScriptedModel::replying(&["Sentiment is Positive.", "So happy for you!"]));
    let (status, body) = post_chat(app_with(model.clone()), "I love this!").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "So happy for you!");
    assert_eq!(
        decode::<SentimentCategory>(body["sentiment"].clone()),
        SentimentCategory::Positive
    );
    assert_eq!(body["score"], 1.0);
    assert_eq!(body["label"], "😀 Very Positive");

    let prompts = model.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("cheerful"));
    assert!(prompts[1].ends_with("I love this!"));
}

#[tokio::test]
async fn test_negative_message() {
    let model = Arc::new(ScriptedModel::replying(&["Sentiment is Negative", "I'm sorry it's rough."]));
    let (status, body) = post_chat(app_with(model.clone()), "I hate everything").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "negative");
    assert_eq!(body["score"], 0.0);
    assert_eq!(body["label"], "😢 Very Negative");
    assert!(model.prompts()[1].contains("empathetic and motivational"));
}

#[tokio::test]
async fn test_neutral_message() {
    let model = Arc::new(ScriptedModel::replying(&["Sentiment is Neutral.", "Noted."]));
    let (status, body) = post_chat(app_with(model), "The meeting is at 3pm").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0.5);
    assert_eq!(body["label"], "😐 Neutral");
}

#[tokio::test]
async fn test_missing_credential() {
    let app = create_router(AppState::new(ChatPipeline::unconfigured(), None));
    let (status, body) = post_chat(app, "I love this!").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let error: ErrorResponse = decode(body);
    assert_eq!(error.warning, MISSING_KEY_WARNING);
    assert_eq!(error.kind, "configuration");
    assert_eq!(error.stage, "idle");
}

#[tokio::test]
async fn test_classification_call_fails() {
    let model = Arc::new(ScriptedModel::new(vec![
        Err(SentimentError::Network("dns failure".to_string())),
        Ok("never used".to_string()),
    ]));
    let (status, body) = post_chat(app_with(model.clone()), "hello").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error: ErrorResponse = decode(body);
    assert_eq!(error.warning, GENERIC_WARNING);
    assert!(error.detail.contains("dns failure"));
    assert_eq!(error.stage, "classifying");
    // Generation never invoked
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_generation_call_fails_with_same_warning() {
    let model = Arc::new(ScriptedModel::new(vec![
        Ok("Sentiment is Positive".to_string()),
        Err(SentimentError::Service {
            status: 500,
            body: "internal".to_string(),
        }),
    ]));
    let (status, body) = post_chat(app_with(model), "great news").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error: ErrorResponse = decode(body);
    assert_eq!(error.warning, GENERIC_WARNING);
    assert_eq!(error.stage, "generating");
}

#[tokio::test]
async fn test_unclassified_reply() {
    let model = Arc::new(ScriptedModel::replying(&["I cannot determine that."]));
    let (status, body) = post_chat(app_with(model.clone()), "???").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = decode(body);
    assert_eq!(error.kind, "unclassified");
    assert!(error.detail.contains("I cannot determine that."));
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_blank_message_rejected() {
    let model = Arc::new(ScriptedModel::replying(&[]));
    let (status, body) = post_chat(app_with(model.clone()), "   ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_input");
    assert_eq!(model.calls(), 0);
}

// ============================================================================
// Status, page and animation
// ============================================================================

#[tokio::test]
async fn test_status_reports_configuration() {
    let response = get(app_with(Arc::new(ScriptedModel::replying(&[]))), "/api/status").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-api-version"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let status: StatusResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(status.status, "ok");
    assert_eq!(status.model.as_deref(), Some("scripted-model"));
    assert!(status.credential_configured);
    assert!(!status.animation_loaded);
}

#[tokio::test]
async fn test_status_without_credential() {
    let app = create_router(AppState::new(ChatPipeline::unconfigured(), None));
    let response = get(app, "/api/status").await;

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let status: StatusResponse = serde_json::from_slice(&body).unwrap();
    assert!(!status.credential_configured);
    assert!(status.model.is_none());
}

#[tokio::test]
async fn test_index_page() {
    let response = get(app_with(Arc::new(ScriptedModel::replying(&[]))), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("AI Chatbot with Sentiment Analysis"));
    assert!(html.contains("/api/chat"));
}

#[tokio::test]
async fn test_animation_absent_is_404() {
    let response = get(app_with(Arc::new(ScriptedModel::replying(&[]))), "/api/animation").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_animation_served_when_loaded() {
    let state = AppState::new(
        ChatPipeline::new(Arc::new(ScriptedModel::replying(&[]))),
        Some(json!({"v": "5.7.4", "layers": []})),
    );
    let response = get(create_router(state), "/api/animation").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let animation: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(animation["v"], "5.7.4");
}
