// src/storage/mod.rs

//! Persistence of the posted-article-ID window.
//!
//! The dedup state is an ordered list of article IDs, most-recent-first,
//! capped at [`MAX_TRACKED_IDS`]. A run replaces it wholesale with the IDs
//! of the latest fetch; entries that fall out of the feed's current window
//! are dropped, which bounds the state to the feed itself.

pub mod local;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::FileStore;
pub use memory::MemoryStore;

/// Maximum number of article IDs kept in the posted-ID state.
pub const MAX_TRACKED_IDS: usize = 100;

/// Trait for posted-ID state backends.
#[async_trait]
pub trait PostedIdStore: Send + Sync {
    /// Load previously-posted article IDs, most-recent-first.
    /// Missing state yields an empty list.
    async fn load(&self) -> Result<Vec<String>>;

    /// Replace the stored IDs with `ids`, most-recent-first, keeping at
    /// most [`MAX_TRACKED_IDS`] entries.
    async fn save(&self, ids: &[String]) -> Result<()>;
}
