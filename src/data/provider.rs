//! Abstract interface for fetching the day's raw snapshot batches.
//!
//! The collector that produces batches (DynamoDB scan, message queue,
//! whatever) is a collaborator; the engine only requires that all blobs
//! recorded so far for a day arrive up front, before computation starts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch all raw batch blobs recorded so far for the given day, in
    /// sampling order.
    async fn fetch_batches(&self, day: NaiveDate) -> Result<Vec<String>>;
}

/// Reads batches from `<root>/<YYYY-MM-DD>/*.json`, ordered by filename.
/// Collectors name files by sampling time, so lexical order is time order.
pub struct JsonDirProvider {
    root: PathBuf,
}

impl JsonDirProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl SnapshotProvider for JsonDirProvider {
    async fn fetch_batches(&self, day: NaiveDate) -> Result<Vec<String>> {
        let day_dir = self.root.join(day.to_string());
        if !day_dir.is_dir() {
            // Early in a session (or on a holiday) there is simply no data
            // yet; that is normal, not an error.
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(&day_dir)
            .await
            .with_context(|| format!("Failed to list batch dir {:?}", day_dir))?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut blobs = Vec::with_capacity(paths.len());
        for path in paths {
            let blob = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read batch file {:?}", path))?;
            blobs.push(blob);
        }

        Ok(blobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 24).unwrap()
    }

    #[tokio::test]
    async fn missing_day_dir_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = JsonDirProvider::new(dir.path());
        assert!(provider.fetch_batches(day()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn batches_come_back_in_filename_order() {
        let dir = tempfile::tempdir().unwrap();
        let day_dir = dir.path().join(day().to_string());
        std::fs::create_dir(&day_dir).unwrap();
        std::fs::write(day_dir.join("0945.json"), "b").unwrap();
        std::fs::write(day_dir.join("0930.json"), "a").unwrap();
        std::fs::write(day_dir.join("notes.txt"), "skip me").unwrap();

        let provider = JsonDirProvider::new(dir.path());
        let blobs = provider.fetch_batches(day()).await.unwrap();
        assert_eq!(blobs, vec!["a".to_string(), "b".to_string()]);
    }
}
