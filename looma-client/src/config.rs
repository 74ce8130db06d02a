//! Client configuration
//!
//! The library has no CLI layer; embedders either construct a
//! [`ClientConfig`] directly or let `from_env` pick up the `LOOMA_*`
//! environment variables.

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`crate::infrastructure::api_client::ApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Looma API server, without a trailing path
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build a config from `LOOMA_API_URL` and `LOOMA_API_TIMEOUT_SECS`,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("LOOMA_API_URL") {
            let url = Url::parse(raw.trim())
                .with_context(|| format!("LOOMA_API_URL is not a valid URL: {raw:?}"))?;
            config.base_url = url.as_str().trim_end_matches('/').to_string();
        }

        if let Ok(raw) = std::env::var("LOOMA_API_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("LOOMA_API_TIMEOUT_SECS is not a number: {raw:?}"))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
