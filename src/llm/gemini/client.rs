// src/llm/gemini/client.rs
// Google Gemini generateContent client (non-streaming, single prompt)

use crate::config::AppConfig;
use crate::error::{Result, SentimentError};
use crate::llm::ModelClient;
use crate::llm::gemini::extraction::extract_reply;
use crate::llm::gemini::types::{GeminiRequest, GeminiResponse};
use crate::llm::http_client::LlmHttpClient;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

/// Header Gemini reads the API key from
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    model: String,
    api_base: String,
    http: LlmHttpClient,
}

impl GeminiClient {
    /// Create a client from configuration and a shared HTTP client
    pub fn new(config: &AppConfig, api_key: String, client: reqwest::Client) -> Self {
        Self {
            api_key,
            model: config.model.clone(),
            api_base: config.api_base.clone(),
            http: LlmHttpClient::from_client(client, config.request_timeout, config.max_retries),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, prompt), fields(request_id, model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", request_id.as_str());

        let request = GeminiRequest::from_prompt(prompt);
        let body = serde_json::to_string(&request)?;
        debug!(request_id = %request_id, "Gemini request: {}", body);

        let url = self.endpoint();

        // Key goes in a header so it never appears in URLs
        let response_body = self
            .http
            .execute_request(&request_id, body, |client, body| {
                client
                    .post(&url)
                    .header(API_KEY_HEADER, self.api_key.as_str())
                    .header("Content-Type", "application/json")
                    .body(body)
            })
            .await?;

        let duration_ms = start_time.elapsed().as_millis() as u64;

        let data: GeminiResponse = serde_json::from_str(&response_body).map_err(|e| {
            SentimentError::Parse(format!("failed to parse Gemini response: {}", e))
        })?;

        if let Some(ref u) = data.usage_metadata {
            info!(
                request_id = %request_id,
                prompt_tokens = u.prompt_token_count.unwrap_or(0),
                completion_tokens = u.candidates_token_count.unwrap_or(0),
                total_tokens = u.total_token_count.unwrap_or(0),
                "Gemini usage stats"
            );
        }

        let reply = extract_reply(&data)?;

        info!(
            request_id = %request_id,
            duration_ms = duration_ms,
            content_len = reply.len(),
            "Gemini generate complete"
        );

        Ok(reply)
    }
}
