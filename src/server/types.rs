//! Request/response types for the HTTP API

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::SentimentError;
use crate::pipeline::PipelineError;

/// API version for capability detection
pub const API_VERSION: &str = "2026.10.1";

/// Shown for every failed model call, whichever of the two calls failed
pub const GENERIC_WARNING: &str =
    "An error occurred while generating the response. Please try again later.";

pub const MISSING_KEY_WARNING: &str =
    "Google API Key is not set. Please set it in the environment variables.";

/// POST /api/chat body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Error body for a failed interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing warning
    pub warning: String,
    /// Raw error detail
    pub detail: String,
    pub kind: String,
    pub stage: String,
}

impl ErrorResponse {
    pub fn from_pipeline(err: &PipelineError) -> (StatusCode, Self) {
        let body = Self {
            warning: user_warning(&err.source).to_string(),
            detail: err.source.to_string(),
            kind: err.source.kind().to_string(),
            stage: err.stage.to_string(),
        };
        (status_for(&err.source), body)
    }
}

fn user_warning(err: &SentimentError) -> &'static str {
    match err {
        SentimentError::MissingCredential(_) => MISSING_KEY_WARNING,
        SentimentError::Config(_) => "The chat service is not configured correctly.",
        SentimentError::InvalidInput(_) => "Please type a message first.",
        SentimentError::Unclassified { .. } => {
            "Could not determine the sentiment of your message. Please try rephrasing it."
        }
        _ => GENERIC_WARNING,
    }
}

fn status_for(err: &SentimentError) -> StatusCode {
    match err {
        SentimentError::MissingCredential(_) | SentimentError::Config(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        SentimentError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        SentimentError::Unclassified { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SentimentError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        SentimentError::Network(_) | SentimentError::Service { .. } | SentimentError::Parse(_) => {
            StatusCode::BAD_GATEWAY
        }
        SentimentError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/status body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub model: Option<String>,
    pub credential_configured: bool,
    pub animation_loaded: bool,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Stage;
    use std::time::Duration;

    fn response_for(stage: Stage, source: SentimentError) -> (StatusCode, ErrorResponse) {
        ErrorResponse::from_pipeline(&PipelineError { stage, source })
    }

    #[test]
    fn test_model_errors_share_generic_warning() {
        let (status, body) = response_for(
            Stage::Classifying,
            SentimentError::Network("connection reset".to_string()),
        );
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.warning, GENERIC_WARNING);
        assert!(body.detail.contains("connection reset"));
        assert_eq!(body.stage, "classifying");

        let (status, body) =
            response_for(Stage::Generating, SentimentError::Timeout(Duration::from_secs(5)));
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body.warning, GENERIC_WARNING);
        assert_eq!(body.kind, "timeout");
    }

    #[test]
    fn test_missing_key_response() {
        let (status, body) =
            response_for(Stage::Idle, SentimentError::MissingCredential("GOOGLE_API_KEY"));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.warning, MISSING_KEY_WARNING);
        assert_eq!(body.kind, "configuration");
        assert_eq!(body.stage, "idle");
    }

    #[test]
    fn test_unclassified_response() {
        let (status, body) = response_for(
            Stage::Classified,
            SentimentError::Unclassified {
                reply: "unsure".to_string(),
            },
        );
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.warning.contains("rephrasing"));
        assert!(body.detail.contains("unsure"));
    }
}
