// src/llm/gemini/mod.rs
// Google Gemini API client

mod client;
mod extraction;
pub mod types;

pub use client::{API_KEY_HEADER, GeminiClient};
pub use extraction::extract_reply;
