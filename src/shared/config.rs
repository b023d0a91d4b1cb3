// src/shared/config.rs
use url::Url;

//
// ──────────────────────────────────────────────────────────
// API configuration
// ──────────────────────────────────────────────────────────
//

const DEFAULT_BASE_URL: &str = "http://localhost:5000/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the portfolio API.
///
/// `base_url` must end with `/` when it carries a path component, so
/// that endpoint paths join underneath it instead of replacing it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL in {var}: {message}")]
    InvalidUrl { var: &'static str, message: String },

    #[error("invalid number in {var}: {message}")]
    InvalidNumber { var: &'static str, message: String },
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            // Matches the development server the admin panel runs against.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PORTFOLIO_API_URL` (default: `http://localhost:5000/`)
    /// - `PORTFOLIO_API_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("PORTFOLIO_API_URL", DEFAULT_BASE_URL)?,
            timeout_secs: env_u64("PORTFOLIO_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
        })
    }
}

fn env_url(var: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
        var,
        message: e.to_string(),
    })
}

fn env_u64(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::InvalidNumber {
                var,
                message: e.to_string(),
            }
        }),
        Err(_) => Ok(default),
    }
}
