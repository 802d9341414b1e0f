// src/sentiment/responder.rs
// Tone-matched reply generation

use super::SentimentCategory;
use crate::error::Result;
use crate::llm::ModelClient;
use std::sync::Arc;
use tracing::info;

/// Generates the chat reply using the category's response template
pub struct ResponseGenerator {
    model: Arc<dyn ModelClient>,
}

impl ResponseGenerator {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    pub async fn respond(&self, category: SentimentCategory, message: &str) -> Result<String> {
        info!(category = %category, "Generating reply");
        self.model.generate(&category.response_prompt(message)).await
    }
}
