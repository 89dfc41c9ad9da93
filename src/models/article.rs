// src/models/article.rs

//! Normalized article record and message rendering.

use serde::{Deserialize, Serialize};

use crate::models::feed::FeedEntry;

/// A normalized article from the news feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Stable per-article identifier (the site-relative article path)
    pub id: String,

    /// Display category label
    pub category: String,

    /// Absolute article URL
    pub url: String,

    /// Article title
    pub title: String,

    /// Article sub-header
    pub sub_header: String,

    /// Absolute image URL, present only when the tile carries a real image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Article {
    /// Build an article from a raw feed entry.
    ///
    /// Relative paths are absolutized against `origin`. The image is kept
    /// only when the tile image declares `content_type == "image"` and
    /// carries a URL.
    pub fn from_entry(entry: &FeedEntry, origin: &str) -> Self {
        let image = entry
            .default_tile
            .image
            .as_ref()
            .filter(|img| img.content_type.as_deref() == Some("image"))
            .and_then(|img| img.image_url.as_deref())
            .map(|path| to_site_url(origin, path));

        Self {
            id: entry.article_url.clone(),
            category: entry.primary_category.clone(),
            url: to_site_url(origin, &entry.article_url),
            title: entry.default_tile.title.clone(),
            sub_header: entry.default_tile.sub_header.clone(),
            image,
        }
    }

    /// Render the Discord message body for this article.
    ///
    /// Heading with category and title, sub-header as subtext, then the
    /// bare URL in angle brackets so Discord does not attach an embed.
    pub fn message_content(&self) -> String {
        format!(
            "## {}: {}\n-# {}\n\n<{}>",
            self.category, self.title, self.sub_header, self.url
        )
    }
}

/// Absolutize a site-relative path against the site origin.
fn to_site_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feed::{Tile, TileImage};

    const ORIGIN: &str = "https://www.minecraft.net";

    fn entry(path: &str, image: Option<TileImage>) -> FeedEntry {
        FeedEntry {
            article_url: path.to_string(),
            primary_category: "News".to_string(),
            default_tile: Tile {
                title: "Caves Update".to_string(),
                sub_header: "Dig deeper".to_string(),
                image,
            },
        }
    }

    #[test]
    fn test_urls_are_absolutized() {
        let article = Article::from_entry(&entry("/en-us/article/caves", None), ORIGIN);
        assert_eq!(article.id, "/en-us/article/caves");
        assert_eq!(article.url, "https://www.minecraft.net/en-us/article/caves");
    }

    #[test]
    fn test_origin_trailing_slash_is_tolerated() {
        let article = Article::from_entry(&entry("/a", None), "https://www.minecraft.net/");
        assert_eq!(article.url, "https://www.minecraft.net/a");
    }

    #[test]
    fn test_image_included_when_content_type_is_image() {
        let image = TileImage {
            content_type: Some("image".to_string()),
            image_url: Some("/content/img/caves.png".to_string()),
        };
        let article = Article::from_entry(&entry("/a", Some(image)), ORIGIN);
        assert_eq!(
            article.image.as_deref(),
            Some("https://www.minecraft.net/content/img/caves.png")
        );
    }

    #[test]
    fn test_image_dropped_for_other_content_types() {
        let image = TileImage {
            content_type: Some("video".to_string()),
            image_url: Some("/content/vid/caves.mp4".to_string()),
        };
        let article = Article::from_entry(&entry("/a", Some(image)), ORIGIN);
        assert!(article.image.is_none());
    }

    #[test]
    fn test_image_dropped_when_absent() {
        let article = Article::from_entry(&entry("/a", None), ORIGIN);
        assert!(article.image.is_none());
    }

    #[test]
    fn test_message_content_format() {
        let article = Article::from_entry(&entry("/en-us/article/caves", None), ORIGIN);
        assert_eq!(
            article.message_content(),
            "## News: Caves Update\n-# Dig deeper\n\n<https://www.minecraft.net/en-us/article/caves>"
        );
    }
}
