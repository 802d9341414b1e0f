// src/lib.rs
// Sentiment-aware chat: classify a message with Gemini, then reply in a matching tone

pub mod assets;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod llm;
pub mod pipeline;
pub mod sentiment;
pub mod server;

pub use error::{Result, SentimentError};
pub use pipeline::{ChatOutcome, ChatPipeline, PipelineError, Stage};
pub use sentiment::{CategoryProfile, SentimentCategory};
