// src/error.rs

//! Unified error handling for the announcer application.

use thiserror::Error;

/// Result type alias for announcer operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error (missing or invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport failure, surfaced after retries are exhausted
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Feed response did not have the expected JSON shape
    #[error("Feed format error: {0}")]
    FeedFormat(String),

    /// A single feed entry was missing required fields
    #[error("Malformed article entry: {0}")]
    MalformedArticle(String),

    /// State file read/write failed
    #[error("State file error for {path}: {source}")]
    StateIo {
        path: String,
        source: std::io::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a feed format error.
    pub fn feed_format(message: impl Into<String>) -> Self {
        Self::FeedFormat(message.into())
    }

    /// Create a malformed article error.
    pub fn malformed_article(message: impl Into<String>) -> Self {
        Self::MalformedArticle(message.into())
    }

    /// Create a state I/O error with the offending path.
    pub fn state_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::StateIo {
            path: path.into(),
            source,
        }
    }
}
