// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Retry/backoff policy for transient HTTP failures
    #[serde(default)]
    pub retry: RetryConfig,

    /// Site origin used to absolutize feed-relative paths
    #[serde(default)]
    pub site: SiteConfig,

    /// Webhook presentation settings
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Posted-ID state persistence settings
    #[serde(default)]
    pub state: StateConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.retry.max_attempts == 0 {
            return Err(AppError::config("retry.max_attempts must be > 0"));
        }
        if self.retry.base_delay_secs == 0 {
            return Err(AppError::config("retry.base_delay_secs must be > 0"));
        }
        if self.retry.max_delay_secs < self.retry.base_delay_secs {
            return Err(AppError::config(
                "retry.max_delay_secs must be >= retry.base_delay_secs",
            ));
        }
        if self.site.origin.trim().is_empty() || !self.site.origin.starts_with("http") {
            return Err(AppError::config("site.origin must be an http(s) origin"));
        }
        if self.state.file.trim().is_empty() {
            return Err(AppError::config("state.file is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests (browser-like to pass bot filters)
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Retry/backoff policy for transient HTTP failures.
///
/// Retries apply only to the listed status codes; connection-level
/// errors and other statuses fail immediately. Retry-After headers
/// are ignored in favor of the computed backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts, including the first one
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry, in seconds (doubles each retry)
    #[serde(default = "defaults::base_delay")]
    pub base_delay_secs: u64,

    /// Upper bound on the computed backoff delay, in seconds
    #[serde(default = "defaults::max_delay")]
    pub max_delay_secs: u64,

    /// HTTP status codes worth retrying
    #[serde(default = "defaults::retry_statuses")]
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::max_attempts(),
            base_delay_secs: defaults::base_delay(),
            max_delay_secs: defaults::max_delay(),
            retry_statuses: defaults::retry_statuses(),
        }
    }
}

/// Site origin settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin prepended to feed-relative article and image paths
    #[serde(default = "defaults::site_origin")]
    pub origin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: defaults::site_origin(),
        }
    }
}

/// Webhook presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Username the webhook posts under
    #[serde(default = "defaults::webhook_username")]
    pub username: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            username: defaults::webhook_username(),
        }
    }
}

/// Posted-ID state persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Path of the posted-ID state file, relative to the working directory
    #[serde(default = "defaults::state_file")]
    pub file: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            file: defaults::state_file(),
        }
    }
}

/// Default values for configuration fields.
mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            .to_string()
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn max_attempts() -> u32 {
        10
    }

    pub fn base_delay() -> u64 {
        2
    }

    pub fn max_delay() -> u64 {
        10
    }

    pub fn retry_statuses() -> Vec<u16> {
        vec![429, 500, 502, 503, 504]
    }

    pub fn site_origin() -> String {
        "https://www.minecraft.net".to_string()
    }

    pub fn webhook_username() -> String {
        "Minecraft News".to_string()
    }

    pub fn state_file() -> String {
        "last_posted_article_id.txt".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.retry.max_attempts, 10);
        assert_eq!(config.retry.retry_statuses, vec![429, 500, 502, 503, 504]);
        assert_eq!(config.state.file, "last_posted_article_id.txt");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [retry]
            max_attempts = 3

            [webhook]
            username = "Test News"
            "#,
        )
        .unwrap();

        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.base_delay_secs, 2);
        assert_eq!(config.webhook.username, "Test News");
        assert_eq!(config.site.origin, "https://www.minecraft.net");
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = Config::default();
        config.retry.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_origin() {
        let mut config = Config::default();
        config.site.origin = "minecraft.net".to_string();
        assert!(config.validate().is_err());
    }
}
