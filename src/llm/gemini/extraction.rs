// src/llm/gemini/extraction.rs
// Response extraction helpers for Gemini API responses

use crate::error::{Result, SentimentError};
use crate::llm::gemini::types::{GeminiContent, GeminiResponse};

/// Extract text content from a Gemini content block (non-thought parts only)
pub fn extract_content(content: &GeminiContent) -> Option<String> {
    let text_parts: Vec<&str> = content
        .parts
        .iter()
        .filter(|part| !part.thought)
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join(""))
    }
}

/// Pull the reply text out of a full response, trimmed.
///
/// An `error` object maps to `Service`; a response without usable text maps
/// to `Parse`, naming the block or finish reason when Gemini gives one.
pub fn extract_reply(response: &GeminiResponse) -> Result<String> {
    if let Some(error) = &response.error {
        return Err(SentimentError::Service {
            status: error.code.unwrap_or(500),
            body: match &error.status {
                Some(status) => format!("{}: {}", status, error.message),
                None => error.message.clone(),
            },
        });
    }

    let candidate = response.candidates.as_ref().and_then(|c| c.first());

    let Some(candidate) = candidate else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref());
        return Err(SentimentError::Parse(match reason {
            Some(reason) => format!("prompt blocked: {}", reason),
            None => "response contained no candidates".to_string(),
        }));
    };

    let text = candidate
        .content
        .as_ref()
        .and_then(extract_content)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    text.ok_or_else(|| {
        SentimentError::Parse(match &candidate.finish_reason {
            Some(reason) => format!("candidate contained no text (finish reason: {})", reason),
            None => "candidate contained no text".to_string(),
        })
    })
}
