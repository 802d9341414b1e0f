// src/http.rs
// Shared HTTP client for all network operations

use crate::config::AppConfig;
use crate::error::{Result, SentimentError};
use std::time::Duration;

/// Create the shared HTTP client with the configured timeouts.
///
/// This client should be created once at startup and passed to all
/// modules that need HTTP access. Uses connection pooling internally.
pub fn create_shared_client(config: &AppConfig) -> Result<reqwest::Client> {
    build_client(config.request_timeout, config.connect_timeout)
}

/// Build a pooled client; fails rather than dropping the timeouts
pub fn build_client(request_timeout: Duration, connect_timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| SentimentError::Config(format!("failed to build HTTP client: {}", e)))
}
