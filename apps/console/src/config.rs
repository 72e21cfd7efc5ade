//! Console configuration.

use std::env;
use std::path::PathBuf;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the durable state slots.
    pub data_dir: PathBuf,
    /// Simulated API latency in milliseconds.
    pub latency_ms: u64,
    /// Demo account email.
    pub demo_email: String,
    /// Demo account password.
    pub demo_password: String,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("ATRIUM_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".atrium")),
            latency_ms: env::var("ATRIUM_LATENCY_MS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(session::DEFAULT_LATENCY_MS),
            demo_email: env::var("ATRIUM_DEMO_EMAIL")
                .unwrap_or_else(|_| "admin@demo.com".to_string()),
            demo_password: env::var("ATRIUM_DEMO_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
            log_level: env::var("ATRIUM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
