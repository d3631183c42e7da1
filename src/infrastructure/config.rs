use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceSettings,
    /// Serve over HTTP when present, otherwise print one report and exit
    #[serde(default)]
    pub server: Option<ServerSettings>,
}

/// Where the snapshot comes from. Checked in order: `url`, `json`, `json_file`.
#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub url: Option<String>,
    pub json: Option<String>,
    pub json_file: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: None,
            json: None,
            json_file: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `GLUCOSE_*` overrides with `__` between nesting levels, e.g.
/// `GLUCOSE_SOURCE__URL` sets `source.url`
fn glucose_environment() -> config::Environment {
    config::Environment::with_prefix("GLUCOSE")
        .prefix_separator("_")
        .separator("__")
}

/// Load `config/glucose.*` (optional) with `GLUCOSE_*` environment overrides
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/glucose").required(false))
        .add_source(glucose_environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_app_config(toml: &str) -> anyhow::Result<AppConfig> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_app_config(
            r#"
            [source]
            url = "http://localhost:29863/info.json?graph=1"
            timeout_secs = 3

            [server]
            bind = "127.0.0.1:8080"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.source.url.as_deref(),
            Some("http://localhost:29863/info.json?graph=1")
        );
        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(config.server.unwrap().bind, "127.0.0.1:8080");
    }

    #[test]
    fn test_defaults() {
        let config = parse_app_config("[source]\njson_file = \"fixtures/snapshot.json\"\n").unwrap();

        assert_eq!(config.source.url, None);
        assert_eq!(config.source.json_file, Some(PathBuf::from("fixtures/snapshot.json")));
        assert_eq!(config.source.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.server.is_none());
    }

    #[test]
    fn test_empty_config() {
        let config = parse_app_config("").unwrap();
        assert!(config.source.url.is_none());
        assert!(config.source.json.is_none());
        assert!(config.server.is_none());
    }

    #[test]
    fn test_environment_overrides_file() {
        let shipped = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/glucose.toml"));
        let env: config::Map<String, String> = [(
            "GLUCOSE_SOURCE__URL".to_string(),
            "http://bridge.local/info.json".to_string(),
        )]
        .into_iter()
        .collect();

        let settings = config::Config::builder()
            .add_source(config::File::from_str(shipped, config::FileFormat::Toml))
            .add_source(glucose_environment().source(Some(env)))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.source.url.as_deref(), Some("http://bridge.local/info.json"));
        assert_eq!(config.source.timeout_secs, 10);
    }

    #[test]
    fn test_shipped_config_parses() {
        let shipped = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/glucose.toml"));
        let config = parse_app_config(shipped).unwrap();
        assert!(config.source.url.is_some());
    }
}
