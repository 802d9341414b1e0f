// src/assets.rs
// Loading-animation asset, fetched once at startup

use serde_json::Value;
use tracing::{debug, info, warn};

/// Fetch the animation JSON.
///
/// Any failure (non-200 status, transport error, body that is not JSON)
/// yields `None`; the page then falls back to a plain spinner.
pub async fn load_animation(client: &reqwest::Client, url: &str) -> Option<Value> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(url = %url, error = %e, "Animation fetch failed, continuing without it");
            return None;
        }
    };

    if response.status() != reqwest::StatusCode::OK {
        debug!(url = %url, status = %response.status(), "Animation not available");
        return None;
    }

    match response.json::<Value>().await {
        Ok(json) => {
            info!(url = %url, "Loading animation fetched");
            Some(json)
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Animation body is not JSON");
            None
        }
    }
}
