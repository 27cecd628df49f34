//! Application configuration loaded from environment variables.

use std::env;

use crate::error::AppError;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Scorekeeper client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote bowling service.
    pub api_url: String,
    /// Per-request timeout for the HTTP client.
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load and validate all configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let api_url = must_var("SCOREKEEPER_API_URL")?;

        let timeout_str = env::var("SCOREKEEPER_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string());
        let http_timeout_secs = timeout_str.parse::<u64>().map_err(|_| {
            AppError::config(format!(
                "SCOREKEEPER_HTTP_TIMEOUT_SECS must be a number of seconds, got '{timeout_str}'"
            ))
        })?;

        Ok(Self {
            api_url,
            http_timeout_secs,
        })
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
