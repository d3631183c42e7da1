// Picks the snapshot source described by the configuration
use crate::application::snapshot_source::SnapshotSource;
use crate::infrastructure::config::SourceSettings;
use crate::infrastructure::http_source::HttpSnapshotSource;
use crate::infrastructure::inline_source::{FileSnapshotSource, InlineSnapshotSource, MissingSource};
use std::sync::Arc;
use std::time::Duration;

/// A remote URL wins over inline JSON, which wins over a file. Empty values
/// count as unset.
pub fn select_source(settings: &SourceSettings) -> anyhow::Result<Arc<dyn SnapshotSource>> {
    let url = settings.url.as_deref().filter(|s| !s.trim().is_empty());
    let json = settings.json.as_deref().filter(|s| !s.trim().is_empty());
    let json_file = settings
        .json_file
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty());

    let source: Arc<dyn SnapshotSource> = if let Some(url) = url {
        let timeout = Duration::from_secs(settings.timeout_secs);
        Arc::new(HttpSnapshotSource::new(url.to_string(), timeout)?)
    } else if let Some(json) = json {
        Arc::new(InlineSnapshotSource::new(json.to_string()))
    } else if let Some(path) = json_file {
        Arc::new(FileSnapshotSource::new(path.to_path_buf()))
    } else {
        tracing::warn!("No snapshot source configured");
        Arc::new(MissingSource)
    };

    tracing::info!("Using snapshot source {}", source.describe());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::snapshot_source::SourceError;
    use std::path::PathBuf;

    fn settings(url: Option<&str>, json: Option<&str>, file: Option<&str>) -> SourceSettings {
        SourceSettings {
            url: url.map(str::to_string),
            json: json.map(str::to_string),
            json_file: file.map(PathBuf::from),
            ..SourceSettings::default()
        }
    }

    #[test]
    fn test_url_first() {
        let source = select_source(&settings(
            Some("http://localhost:29863/info.json"),
            Some("{}"),
            Some("snap.json"),
        ))
        .unwrap();
        assert_eq!(source.describe(), "http://localhost:29863/info.json");
    }

    #[test]
    fn test_inline_before_file() {
        let source = select_source(&settings(None, Some("{}"), Some("snap.json"))).unwrap();
        assert_eq!(source.describe(), "inline snapshot (2 bytes)");
    }

    #[test]
    fn test_file_last() {
        let source = select_source(&settings(None, None, Some("snap.json"))).unwrap();
        assert_eq!(source.describe(), "snap.json");
    }

    #[tokio::test]
    async fn test_empty_values_are_unset() {
        let source = select_source(&settings(Some(""), Some(""), Some("snap.json"))).unwrap();
        assert_eq!(source.describe(), "snap.json");

        let source = select_source(&settings(Some(" "), Some(""), Some(""))).unwrap();
        assert!(matches!(
            source.fetch_document().await,
            Err(SourceError::NoInput)
        ));
    }

    #[tokio::test]
    async fn test_nothing_configured() {
        let source = select_source(&SourceSettings::default()).unwrap();
        assert!(source.fetch_document().await.is_err());
    }
}
