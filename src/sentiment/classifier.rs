// src/sentiment/classifier.rs
// Sentiment classification through the model client

use super::SentimentCategory;
use crate::error::Result;
use crate::llm::ModelClient;
use std::sync::Arc;
use tracing::{debug, info};

/// Build the classification prompt; the message is embedded unescaped
pub fn classification_prompt(message: &str) -> String {
    format!(
        "Analyze the sentiment of the following message: '{}'.\n\
         Respond with one of the following: Sentiment is Positive, Sentiment is Negative, Sentiment is Neutral.",
        message
    )
}

/// Result of one classification call
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// `None` when the model answered but named no category
    pub category: Option<SentimentCategory>,
    /// Model reply, trimmed
    pub reply: String,
}

/// Asks the model which [`SentimentCategory`] a message belongs to
pub struct SentimentClassifier {
    model: Arc<dyn ModelClient>,
}

impl SentimentClassifier {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// Classify `message`.
    ///
    /// A reply naming no category is not an error here; the caller decides.
    /// Model failures are returned unchanged.
    pub async fn classify(&self, message: &str) -> Result<Classification> {
        info!("Classifying message (length: {} chars)", message.len());

        let reply = self.model.generate(&classification_prompt(message)).await?;
        debug!(reply = %reply, "Classification reply");

        Ok(Classification {
            category: SentimentCategory::from_reply(&reply),
            reply,
        })
    }
}
