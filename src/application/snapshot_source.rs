// Source trait for obtaining one raw snapshot document
use async_trait::async_trait;
use thiserror::Error;

/// Reasons no snapshot document could be obtained. When one of these occurs
/// the normalizer is never run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no input provided")]
    NoInput,
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Human readable origin, used in logs
    fn describe(&self) -> String;

    /// Fetch the raw snapshot text
    async fn fetch_document(&self) -> Result<String, SourceError>;
}
