// Glucose service - Use case for turning the configured source into a reading
use crate::application::snapshot_source::{SnapshotSource, SourceError};
use crate::domain::normalizer::normalize_str;
use crate::domain::reading::NormalizedSnapshot;
use serde::Serialize;
use std::sync::Arc;

/// A reading together with the acquisition error, if there was one. On error
/// the reading is all absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingReport {
    pub reading: NormalizedSnapshot,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct GlucoseService {
    source: Arc<dyn SnapshotSource>,
}

impl GlucoseService {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    pub async fn current_reading(&self) -> Result<NormalizedSnapshot, SourceError> {
        let raw = self.source.fetch_document().await?;
        tracing::debug!(
            "Fetched {} bytes of snapshot from {}",
            raw.len(),
            self.source.describe()
        );

        let reading = normalize_str(&raw)?;
        tracing::debug!("Normalized snapshot with {} samples", reading.samples.len());
        Ok(reading)
    }

    /// Like `current_reading`, but reports a failed acquisition next to an
    /// all-absent reading instead of failing
    pub async fn reading_or_absent(&self) -> ReadingReport {
        match self.current_reading().await {
            Ok(reading) => ReadingReport {
                reading,
                error: None,
            },
            Err(e) => {
                tracing::error!("Error fetching snapshot from {}: {}", self.source.describe(), e);
                ReadingReport {
                    reading: NormalizedSnapshot::absent(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct FixedSource(Option<&'static str>);

    #[async_trait]
    impl SnapshotSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        async fn fetch_document(&self) -> Result<String, SourceError> {
            self.0.map(str::to_string).ok_or(SourceError::NoInput)
        }
    }

    fn service(doc: Option<&'static str>) -> GlucoseService {
        GlucoseService::new(Arc::new(FixedSource(doc)))
    }

    #[tokio::test]
    async fn test_current_reading() {
        let reading = service(Some(r#"{"status":{"bat":61},"graph":{"lines":[{"name":"low","points":[[4,3.2]]}]}}"#))
            .current_reading()
            .await
            .unwrap();

        assert_eq!(reading.battery_level, Some(61));
        assert_eq!(reading.samples.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_source_error() {
        let err = service(Some("<html>")).current_reading().await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_no_input_reports_absent() {
        let report = service(None).reading_or_absent().await;

        assert_eq!(report.reading, NormalizedSnapshot::absent());
        assert_eq!(report.error.as_deref(), Some("no input provided"));
    }

    #[tokio::test]
    async fn test_success_has_no_error() {
        let report = service(Some(r#"{"bg":{"trend":"Flat"}}"#)).reading_or_absent().await;

        assert_eq!(report.error, None);
        assert_eq!(report.reading.trend.as_deref(), Some("Flat"));
    }
}
