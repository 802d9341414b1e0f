// src/llm/mod.rs
// Model client abstraction layer

pub mod gemini;
pub mod http_client;

#[cfg(test)]
pub(crate) mod scripted;

pub use gemini::GeminiClient;

use crate::error::Result;
use async_trait::async_trait;

/// Boundary to the hosted language model: one prompt in, generated text out.
///
/// Implementations return the reply trimmed of surrounding whitespace and
/// keep no state between calls.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a single prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logging and the status endpoint
    fn model_name(&self) -> &str;
}
