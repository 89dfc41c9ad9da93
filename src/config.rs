// src/config.rs

//! Configuration loading utilities.
//!
//! Tunables live in an optional TOML file (see `models::Config`); the two
//! required endpoints come from the environment so the webhook URL stays
//! out of checked-in files.

use std::env;

use url::Url;

use crate::error::{AppError, Result};

/// Environment variable holding the news feed URL.
pub const FEED_URL_VAR: &str = "MINECRAFT_FEED_URL";

/// Environment variable holding the Discord webhook URL.
pub const WEBHOOK_URL_VAR: &str = "DISCORD_WEBHOOK_URL";

/// Required endpoint URLs, taken from the environment.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub feed_url: String,
    pub webhook_url: String,
}

impl Endpoints {
    /// Read both endpoints from the environment, failing fast when either
    /// is missing or not a valid URL.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            feed_url: required_url(FEED_URL_VAR, env::var(FEED_URL_VAR).ok())?,
            webhook_url: required_url(WEBHOOK_URL_VAR, env::var(WEBHOOK_URL_VAR).ok())?,
        })
    }
}

fn required_url(name: &str, value: Option<String>) -> Result<String> {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::config(format!("{name} is not set")))?;

    Url::parse(&value).map_err(|e| AppError::config(format!("{name} is not a valid URL: {e}")))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_url_accepts_valid_url() {
        let url = required_url("TEST_VAR", Some("https://example.com/feed".to_string())).unwrap();
        assert_eq!(url, "https://example.com/feed");
    }

    #[test]
    fn test_required_url_rejects_missing() {
        let err = required_url("TEST_VAR", None).unwrap_err();
        assert!(err.to_string().contains("TEST_VAR is not set"));
    }

    #[test]
    fn test_required_url_rejects_empty() {
        assert!(required_url("TEST_VAR", Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_required_url_rejects_garbage() {
        let err = required_url("TEST_VAR", Some("not a url".to_string())).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
