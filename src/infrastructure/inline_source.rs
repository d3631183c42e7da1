// Snapshot sources that need no network: inline text, a file on disk, nothing
use crate::application::snapshot_source::{SnapshotSource, SourceError};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct InlineSnapshotSource {
    text: String,
}

impl InlineSnapshotSource {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

#[async_trait]
impl SnapshotSource for InlineSnapshotSource {
    fn describe(&self) -> String {
        format!("inline snapshot ({} bytes)", self.text.len())
    }

    async fn fetch_document(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

/// Reads the file on every fetch, so a bridge that rewrites it is picked up
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_document(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.describe(),
                source,
            })
    }
}

/// Stand-in when no source is configured
#[derive(Debug, Clone, Default)]
pub struct MissingSource;

#[async_trait]
impl SnapshotSource for MissingSource {
    fn describe(&self) -> String {
        "no source".to_string()
    }

    async fn fetch_document(&self) -> Result<String, SourceError> {
        Err(SourceError::NoInput)
    }
}
