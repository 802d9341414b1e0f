// src/llm/http_client.rs
// Request execution with typed errors and optional retry

use crate::error::{Result, SentimentError};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Default base backoff duration between retries (doubles each attempt)
const DEFAULT_BASE_BACKOFF_SECS: u64 = 1;

/// HTTP executor shared by model clients
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    /// Extra attempts after the first one; zero means a single call
    pub max_retries: u32,
    pub base_backoff: Duration,
}

impl LlmHttpClient {
    /// Wrap an existing reqwest::Client built with `request_timeout`
    pub fn from_client(client: Client, request_timeout: Duration, max_retries: u32) -> Self {
        Self {
            client,
            request_timeout,
            max_retries,
            base_backoff: Duration::from_secs(DEFAULT_BASE_BACKOFF_SECS),
        }
    }

    /// Execute an HTTP request using a custom request builder.
    ///
    /// The `build_request` closure is called on each attempt with the reqwest
    /// Client and the request body. Returns the response body as text on a
    /// 2xx status. Only 429, 5xx, connect and timeout failures are retried,
    /// and only when `max_retries` allows it.
    pub async fn execute_request<F>(
        &self,
        request_id: &str,
        body: String,
        build_request: F,
    ) -> Result<String>
    where
        F: Fn(&Client, String) -> reqwest::RequestBuilder,
    {
        let mut attempts = 0;
        let mut backoff = self.base_backoff;

        loop {
            let response_result = build_request(&self.client, body.clone()).send().await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        let error_body = response.text().await.unwrap_or_default();

                        if attempts < self.max_retries
                            && (status.as_u16() == 429 || status.is_server_error())
                        {
                            warn!(
                                request_id = %request_id,
                                status = %status,
                                error = %error_body,
                                "Transient error, retrying in {:?}...",
                                backoff
                            );
                            tokio::time::sleep(backoff).await;
                            attempts += 1;
                            backoff *= 2;
                            continue;
                        }

                        return Err(SentimentError::Service {
                            status: status.as_u16(),
                            body: error_body,
                        });
                    }

                    return response
                        .text()
                        .await
                        .map_err(|e| SentimentError::from_transport(e, self.request_timeout));
                }
                Err(e) => {
                    let e = e.without_url();
                    // Request may have been processed for anything but connect/timeout
                    if attempts < self.max_retries && (e.is_connect() || e.is_timeout()) {
                        warn!(
                            request_id = %request_id,
                            error = %e,
                            "Request failed (connect/timeout), retrying in {:?}...",
                            backoff
                        );
                        tokio::time::sleep(backoff).await;
                        attempts += 1;
                        backoff *= 2;
                        continue;
                    }
                    return Err(SentimentError::from_transport(e, self.request_timeout));
                }
            }
        }
    }
}
