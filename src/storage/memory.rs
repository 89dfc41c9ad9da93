// src/storage/memory.rs

//! In-memory posted-ID store for tests and dry runs.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::storage::{MAX_TRACKED_IDS, PostedIdStore};

/// Posted-ID store that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ids: Mutex<Vec<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with IDs, most-recent-first.
    pub fn with_ids(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ids: Mutex::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Snapshot of the stored IDs.
    pub fn snapshot(&self) -> Vec<String> {
        self.ids.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl PostedIdStore for MemoryStore {
    async fn load(&self) -> Result<Vec<String>> {
        Ok(self.snapshot())
    }

    async fn save(&self, ids: &[String]) -> Result<()> {
        let bounded = ids[..ids.len().min(MAX_TRACKED_IDS)].to_vec();
        *self.ids.lock().unwrap_or_else(|e| e.into_inner()) = bounded;
        Ok(())
    }
}
