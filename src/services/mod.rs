//! HTTP-facing services: feed fetching and webhook publishing.

pub mod feed;
pub mod webhook;

pub use feed::{FeedClient, FeedSource};
pub use webhook::{ArticlePublisher, WebhookClient};
