// src/pipeline.rs
// One chat interaction: credential check, classification, reply generation

use crate::config::{API_KEY_VAR, AppConfig};
use crate::error::SentimentError;
use crate::llm::{GeminiClient, ModelClient};
use crate::sentiment::{ResponseGenerator, SentimentCategory, SentimentClassifier};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Where an interaction is in the request state machine.
///
/// `Idle -> Classifying -> Classified -> Generating -> Done`. A failure ends
/// the interaction in the stage it happened in; there are no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Classifying,
    Classified,
    Generating,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Classifying => write!(f, "classifying"),
            Self::Classified => write!(f, "classified"),
            Self::Generating => write!(f, "generating"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Failure of one interaction, tagged with the stage it ended in
#[derive(Debug, Error)]
#[error("{source} (stage: {stage})")]
pub struct PipelineError {
    pub stage: Stage,
    pub source: SentimentError,
}

impl PipelineError {
    fn at(stage: Stage, source: SentimentError) -> Self {
        Self { stage, source }
    }
}

/// What the presentation layer renders for a completed interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatOutcome {
    pub reply: String,
    pub sentiment: SentimentCategory,
    pub score: f32,
    pub label: String,
}

struct Engine {
    classifier: SentimentClassifier,
    responder: ResponseGenerator,
    model_name: String,
}

/// Orchestrates the two model calls of a chat interaction
pub struct ChatPipeline {
    engine: Option<Engine>,
}

impl ChatPipeline {
    /// Pipeline backed by the given model client
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        let model_name = model.model_name().to_string();
        Self {
            engine: Some(Engine {
                classifier: SentimentClassifier::new(model.clone()),
                responder: ResponseGenerator::new(model),
                model_name,
            }),
        }
    }

    /// Pipeline with no credential; every interaction fails before any call
    pub fn unconfigured() -> Self {
        Self { engine: None }
    }

    /// Build the Gemini-backed pipeline, or an unconfigured one without a key
    pub fn from_config(config: &AppConfig, http: reqwest::Client) -> Self {
        match &config.api_key {
            Some(key) => Self::new(Arc::new(GeminiClient::new(config, key.clone(), http))),
            None => {
                warn!("{} not set - chat requests will report a configuration error", API_KEY_VAR);
                Self::unconfigured()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.engine.is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.engine.as_ref().map(|e| e.model_name.as_str())
    }

    /// Run one interaction for `message`
    pub async fn analyze(&self, message: &str) -> Result<ChatOutcome, PipelineError> {
        let start = Instant::now();

        let Some(engine) = &self.engine else {
            return Err(PipelineError::at(
                Stage::Idle,
                SentimentError::MissingCredential(API_KEY_VAR),
            ));
        };

        if message.trim().is_empty() {
            return Err(PipelineError::at(
                Stage::Idle,
                SentimentError::InvalidInput("message is empty".to_string()),
            ));
        }

        let classification = engine
            .classifier
            .classify(message)
            .await
            .map_err(|e| fail(Stage::Classifying, e))?;

        let Some(category) = classification.category else {
            return Err(fail(
                Stage::Classified,
                SentimentError::Unclassified {
                    reply: classification.reply,
                },
            ));
        };
        info!(category = %category, stage = %Stage::Classified, "Message classified");

        let reply = engine
            .responder
            .respond(category, message)
            .await
            .map_err(|e| fail(Stage::Generating, e))?;

        info!(
            category = %category,
            stage = %Stage::Done,
            duration_ms = start.elapsed().as_millis() as u64,
            "Interaction complete"
        );

        Ok(ChatOutcome {
            reply,
            sentiment: category,
            score: category.score(),
            label: category.label().to_string(),
        })
    }
}

fn fail(stage: Stage, source: SentimentError) -> PipelineError {
    warn!(stage = %stage, kind = source.kind(), error = %source, "Interaction failed");
    PipelineError::at(stage, source)
}
