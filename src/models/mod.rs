// src/models/mod.rs

//! Domain models for the announcer application.

mod article;
mod config;
mod feed;

// Re-export all public types
pub use article::Article;
pub use config::{Config, HttpConfig, RetryConfig, SiteConfig, StateConfig, WebhookConfig};
pub use feed::{FeedEntry, Tile, TileImage};
