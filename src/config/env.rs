// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use crate::credentials::looks_like_google_api_key;
use crate::error::{Result, SentimentError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Primary credential variable; `GEMINI_API_KEY` is accepted as a fallback
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "GEMINI_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_ANIMATION_URL: &str =
    "https://lottie.host/cc2b3b2d-5589-4c22-a42b-9c3d50fb8315/b8kIpS7sC0.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: u32 = 0;

/// Process-wide configuration, built once at startup and shared read-only
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key (GOOGLE_API_KEY or GEMINI_API_KEY)
    pub api_key: Option<String>,
    /// Model identifier used for both calls (SENTIMENT_MODEL)
    pub model: String,
    /// Base URL for `{model}:generateContent` (SENTIMENT_API_BASE)
    pub api_base: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Retries on transient model failures (SENTIMENT_MAX_RETRIES, default none)
    pub max_retries: u32,
    /// Loading animation JSON, fetched once at startup (SENTIMENT_ANIMATION_URL)
    pub animation_url: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            animation_url: Some(DEFAULT_ANIMATION_URL.to_string()),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load all environment configuration (call once at startup)
    pub fn from_env() -> Self {
        info!("Loading environment configuration");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset. Unparseable numbers fall back to
    /// their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_key = read(API_KEY_VAR)
            .or_else(|| read(API_KEY_FALLBACK_VAR))
            .map(|k| k.trim().to_string());

        let animation_url = match read("SENTIMENT_ANIMATION_URL") {
            Some(url) if url.eq_ignore_ascii_case("none") => None,
            Some(url) => Some(url),
            None => defaults.animation_url,
        };

        let config = Self {
            api_key,
            model: read("SENTIMENT_MODEL").unwrap_or(defaults.model),
            api_base: read("SENTIMENT_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            request_timeout: Duration::from_secs(parse_num(
                "SENTIMENT_REQUEST_TIMEOUT_SECS",
                read("SENTIMENT_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            connect_timeout: Duration::from_secs(parse_num(
                "SENTIMENT_CONNECT_TIMEOUT_SECS",
                read("SENTIMENT_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
            max_retries: parse_num(
                "SENTIMENT_MAX_RETRIES",
                read("SENTIMENT_MAX_RETRIES"),
                DEFAULT_MAX_RETRIES,
            ),
            animation_url,
            host: read("SENTIMENT_HOST").unwrap_or(defaults.host),
            port: parse_num("SENTIMENT_PORT", read("SENTIMENT_PORT"), DEFAULT_PORT),
        };

        debug!(
            model = %config.model,
            api_base = %config.api_base,
            credential = config.has_credential(),
            "Configuration loaded"
        );
        config
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        match &self.api_key {
            None => validation.add_warning(format!(
                "{} is not set. Chat requests will fail until it is configured.",
                API_KEY_VAR
            )),
            Some(key) if !looks_like_google_api_key(key) => validation.add_warning(format!(
                "{} does not look like a Google API key",
                API_KEY_VAR
            )),
            Some(_) => {}
        }

        if self.model.trim().is_empty() {
            validation.add_error("SENTIMENT_MODEL must not be empty");
        }
        if self.request_timeout.is_zero() {
            validation.add_error("SENTIMENT_REQUEST_TIMEOUT_SECS must be greater than zero");
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            validation.add_error(format!(
                "SENTIMENT_API_BASE must be an http(s) URL, got '{}'",
                self.api_base
            ));
        }

        validation
    }

    /// Validate, log warnings, and fail with [`SentimentError::Config`] on errors
    pub fn ensure_valid(&self) -> Result<ConfigValidation> {
        let validation = self.validate();
        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        if !validation.is_valid() {
            return Err(SentimentError::Config(validation.report()));
        }
        Ok(validation)
    }
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

fn parse_num<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(value = %raw, default = %default, "Invalid {}, using default", name);
            default
        }),
        None => default,
    }
}
