// src/storage/local.rs

//! File-backed posted-ID store.
//!
//! One ID per line, UTF-8, most-recent-first, no trailing newline.
//! Writes go to a temp file first and are renamed into place so a crash
//! mid-write cannot corrupt the previous state.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::storage::{MAX_TRACKED_IDS, PostedIdStore};

/// Posted-ID store backed by a flat text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn state_err(&self, source: std::io::Error) -> AppError {
        AppError::state_io(self.path.to_string_lossy(), source)
    }
}

#[async_trait]
impl PostedIdStore for FileStore {
    async fn load(&self) -> Result<Vec<String>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.state_err(e)),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn save(&self, ids: &[String]) -> Result<()> {
        let bounded = &ids[..ids.len().min(MAX_TRACKED_IDS)];
        let content = bounded.join("\n");

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp)
            .await
            .map_err(|e| self.state_err(e))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| self.state_err(e))?;
        file.flush().await.map_err(|e| self.state_err(e))?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.state_err(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("state.txt"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("state.txt"));

        store.save(&ids(&["/a", "/b", "/c"])).await.unwrap();
        assert_eq!(store.load().await.unwrap(), ids(&["/a", "/b", "/c"]));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_state() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("state.txt"));

        store.save(&ids(&["/old-1", "/old-2"])).await.unwrap();
        store.save(&ids(&["/new"])).await.unwrap();
        assert_eq!(store.load().await.unwrap(), ids(&["/new"]));
    }

    #[tokio::test]
    async fn test_save_is_bounded_to_max_tracked() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("state.txt"));

        let many: Vec<String> = (0..150).map(|i| format!("/article/{i}")).collect();
        store.save(&many).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), MAX_TRACKED_IDS);
        assert_eq!(loaded[0], "/article/0");
        assert_eq!(loaded[99], "/article/99");
    }

    #[tokio::test]
    async fn test_no_trailing_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state.txt");
        let store = FileStore::new(&path);

        store.save(&ids(&["/a", "/b"])).await.unwrap();
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "/a\n/b");
    }

    #[tokio::test]
    async fn test_load_skips_blank_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state.txt");
        tokio::fs::write(&path, "/a\n\n/b\n").await.unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.load().await.unwrap(), ids(&["/a", "/b"]));
    }
}
