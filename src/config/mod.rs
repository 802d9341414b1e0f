// src/config/mod.rs
// Configuration and shared constants

pub mod env;

pub use env::{API_KEY_VAR, AppConfig, ConfigValidation};
