// src/services/feed.rs

//! News feed fetching and normalization.

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{Article, FeedEntry};
use crate::utils::RetryingClient;

/// Source of the current article list, in feed order (newest first).
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Article>>;
}

/// Feed fetcher backed by the news-grid JSON endpoint.
pub struct FeedClient {
    client: RetryingClient,
    feed_url: String,
    origin: String,
}

impl FeedClient {
    pub fn new(
        client: RetryingClient,
        feed_url: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
            origin: origin.into(),
        }
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch(&self) -> Result<Vec<Article>> {
        log::info!("Fetching news articles from {}", self.feed_url);

        let response = self.client.get(&self.feed_url).await?;
        let text = response.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| AppError::feed_format(format!("response body is not valid JSON: {e}")))?;

        let entries = body
            .get("article_grid")
            .and_then(|v| v.as_array())
            .ok_or_else(|| AppError::feed_format("missing or non-array `article_grid` key"))?;

        Ok(normalize_entries(entries, &self.origin))
    }
}

/// Normalize raw feed entries into articles, preserving feed order.
///
/// A single malformed entry is skipped with a warning; only a broken
/// feed shape (handled by the caller) aborts the whole fetch.
pub fn normalize_entries(entries: &[serde_json::Value], origin: &str) -> Vec<Article> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match parse_entry(value) {
            Ok(entry) => Some(Article::from_entry(&entry, origin)),
            Err(e) => {
                log::warn!("Skipping feed entry {index}: {e}");
                None
            }
        })
        .collect()
}

fn parse_entry(value: &serde_json::Value) -> Result<FeedEntry> {
    serde_json::from_value(value.clone()).map_err(|e| AppError::malformed_article(e.to_string()))
}
