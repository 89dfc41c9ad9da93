// src/models/feed.rs

//! Raw wire types for the news feed response.
//!
//! The feed is a JSON object whose `article_grid` key holds an array of
//! article entries. Only the fields the announcer needs are modeled;
//! everything else in an entry is ignored.

use serde::Deserialize;

/// One raw entry from the feed's `article_grid` array.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    /// Site-relative article path, stable across fetches (the dedup key)
    pub article_url: String,

    /// Display category label
    pub primary_category: String,

    /// Tile with title, sub-header, and optional image metadata
    pub default_tile: Tile,
}

/// The display tile attached to a feed entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Tile {
    pub title: String,
    pub sub_header: String,

    /// Image metadata, absent or null for text-only tiles
    #[serde(default)]
    pub image: Option<TileImage>,
}

/// Image metadata inside a tile.
#[derive(Debug, Clone, Deserialize)]
pub struct TileImage {
    #[serde(default)]
    pub content_type: Option<String>,

    /// Site-relative image path
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}
