// src/error.rs
// Error taxonomy for the sentiment chat service

use std::time::Duration;
use thiserror::Error;

/// Main error type for the sentiment chat library
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("configuration error: {0} is not set")]
    MissingCredential(&'static str),

    #[error("invalid configuration:\n{0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("model request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("model service error {status}: {body}")]
    Service { status: u16, body: String },

    #[error("malformed model response: {0}")]
    Parse(String),

    #[error("no sentiment label found in model reply: {reply:?}")]
    Unclassified { reply: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result using SentimentError
pub type Result<T> = std::result::Result<T, SentimentError>;

impl SentimentError {
    /// Short machine-readable kind, used in API error bodies and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) | Self::Config(_) => "configuration",
            Self::InvalidInput(_) => "invalid_input",
            Self::Network(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::Service { .. } => "service",
            Self::Parse(_) => "parse",
            Self::Unclassified { .. } => "unclassified",
            Self::Io(_) => "io",
        }
    }

    /// True for failures of the outbound model call itself
    pub fn is_model_call(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::Service { .. } | Self::Parse(_)
        )
    }

    /// Map a transport-level reqwest failure onto the taxonomy.
    ///
    /// The request URL is stripped from the message so error bodies and logs
    /// never carry endpoint details.
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SentimentError {
    fn from(err: serde_json::Error) -> Self {
        SentimentError::Parse(err.to_string())
    }
}
