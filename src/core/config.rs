use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

const DEFAULT_NBU_BASE_URL: &str = "https://bank.gov.ua";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NbuProviderConfig {
    pub base_url: String,
}

impl Default for NbuProviderConfig {
    fn default() -> Self {
        NbuProviderConfig {
            base_url: DEFAULT_NBU_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub nbu: Option<NbuProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            nbu: Some(NbuProviderConfig::default()),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Skip the remote source and use the fallback rates.
    #[serde(default)]
    pub offline: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            request_timeout_secs: default_timeout_secs(),
            offline: false,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or the defaults when no
    /// file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_or_default(&config_path)
    }

    /// Like [`AppConfig::load_from_path`], but a missing file yields the
    /// defaults.
    pub fn load_or_default<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ua", "hryvnia", "hryvnia")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn nbu_base_url(&self) -> &str {
        self.providers
            .nbu
            .as_ref()
            .map_or(DEFAULT_NBU_BASE_URL, |p| &p.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  nbu:
    base_url: "http://example.com/nbu"
request_timeout_secs: 3
offline: true
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.nbu_base_url(), "http://example.com/nbu");
        assert_eq!(config.request_timeout_secs, 3);
        assert!(config.offline);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.nbu_base_url(), "https://bank.gov.ua");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.offline);

        let no_nbu: AppConfig =
            serde_yaml::from_str("providers:\n  nbu: null\n").expect("Failed to deserialize");
        assert!(no_nbu.providers.nbu.is_none());
        assert_eq!(no_nbu.nbu_base_url(), "https://bank.gov.ua");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("config.yaml")).unwrap();
        assert_eq!(config.nbu_base_url(), "https://bank.gov.ua");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.offline);
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "offline: true\nrequest_timeout_secs: 2\n").unwrap();

        let config = AppConfig::load_or_default(&path).unwrap();
        assert!(config.offline);
        assert_eq!(config.request_timeout_secs, 2);
    }

    #[test]
    fn test_load_or_default_rejects_invalid_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "offline: [not a bool\n").unwrap();

        let result = AppConfig::load_or_default(&path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse config file")
        );
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("missing.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
