// src/services/webhook.rs

//! Discord webhook publishing.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::utils::RetryingClient;

/// Destination for formatted article messages.
#[async_trait]
pub trait ArticlePublisher: Send + Sync {
    async fn publish(&self, content: &str) -> Result<()>;
}

/// JSON body of a webhook execution request.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
    username: &'a str,
    allowed_mentions: AllowedMentions,
}

/// Empty `parse` list suppresses all @mention pings.
#[derive(Debug, Default, Serialize)]
struct AllowedMentions {
    parse: Vec<String>,
}

/// Publisher that POSTs messages to a Discord webhook URL.
pub struct WebhookClient {
    client: RetryingClient,
    webhook_url: String,
    username: String,
}

impl WebhookClient {
    pub fn new(
        client: RetryingClient,
        webhook_url: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
            username: username.into(),
        }
    }
}

#[async_trait]
impl ArticlePublisher for WebhookClient {
    async fn publish(&self, content: &str) -> Result<()> {
        let payload = WebhookPayload {
            content,
            username: &self.username,
            allowed_mentions: AllowedMentions::default(),
        };

        // wait=true makes Discord confirm the message was created
        self.client
            .post_json(&self.webhook_url, &[("wait", "true")], &payload)
            .await?;
        Ok(())
    }
}
