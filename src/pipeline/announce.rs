// src/pipeline/announce.rs

//! Announcement pipeline: Load -> Fetch -> Diff -> Publish -> Persist.
//!
//! State is only persisted after every new article has been published,
//! so a failed run never advances the dedup window. Delivery is
//! at-least-once: a crash between a successful webhook call and the
//! persist step means the article is posted again on the next run.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::Article;
use crate::services::{ArticlePublisher, FeedSource};
use crate::storage::{MAX_TRACKED_IDS, PostedIdStore};

/// Outcome of one announcer run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Articles in the current feed window
    pub fetched: usize,
    /// Articles published this run
    pub posted: usize,
}

/// Run the announcer once.
pub async fn run(
    feed: &dyn FeedSource,
    publisher: &dyn ArticlePublisher,
    store: &dyn PostedIdStore,
) -> Result<RunSummary> {
    let started_at = Utc::now();

    log::info!("Loading posted article IDs...");
    let posted_ids = store.load().await?;

    let articles = feed.fetch().await?;
    log::info!("Feed returned {} articles", articles.len());

    let new = select_new(&articles, &posted_ids);
    if new.is_empty() {
        log::info!("No new news articles found");
        return Ok(RunSummary {
            started_at,
            finished_at: Utc::now(),
            fetched: articles.len(),
            posted: 0,
        });
    }

    log::info!("Posting {} new articles to the webhook...", new.len());
    // Oldest first, so chat history reads chronologically
    for article in new.iter().rev() {
        log::info!("Posting {}", article.id);
        publisher.publish(&article.message_content()).await?;
    }

    log::info!("Updating posted article IDs...");
    let ids: Vec<String> = articles
        .iter()
        .take(MAX_TRACKED_IDS)
        .map(|a| a.id.clone())
        .collect();
    store.save(&ids).await?;

    Ok(RunSummary {
        started_at,
        finished_at: Utc::now(),
        fetched: articles.len(),
        posted: new.len(),
    })
}

/// Articles whose ID is not in the posted set, preserving feed order
/// (newest first). Set membership, not a positional cutoff, so feed
/// reordering or removals do not cause re-posts.
fn select_new<'a>(articles: &'a [Article], posted_ids: &[String]) -> Vec<&'a Article> {
    let posted: HashSet<&str> = posted_ids.iter().map(String::as_str).collect();
    articles
        .iter()
        .filter(|a| !posted.contains(a.id.as_str()))
        .collect()
}
