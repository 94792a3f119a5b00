//! Environment-driven runtime configuration.
//!
//! Read once at startup. A missing required key is the one fatal,
//! fail-fast condition in the system; everything after startup degrades
//! per-field instead of erroring.

use std::env;

use thiserror::Error;

use crate::ai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application-level constants
pub const APP_NAME: &str = "Pandu";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} tidak ditemukan di environment")]
    MissingKey(&'static str),
}

/// Runtime configuration for the production collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub google_access_token: String,
    pub sheet_id: String,
    pub drive_parent_folder_id: Option<String>,
}

impl Config {
    /// Read configuration from the environment, failing fast on missing
    /// required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            gemini_api_key: require("GEMINI_API_KEY")?,
            gemini_base_url: optional("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            gemini_model: optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            google_access_token: require("GOOGLE_ACCESS_TOKEN")?,
            sheet_id: require("SHEET_ID")?,
            drive_parent_folder_id: optional("DRIVE_PARENT_FOLDER_ID"),
        })
    }
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::MissingKey(key))
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
