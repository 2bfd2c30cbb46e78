use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

/// Dataset filename used when neither the CLI nor the config name one.
pub const DEFAULT_DATASET: &str = "tour.csv";

/// Application configuration loaded from TOML config file.
/// All fields have sensible defaults — the config file is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Tour dataset to load (overridden by `--dataset`).
    pub dataset_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from `~/.config/encore/config.toml`.
    /// Returns default config if file doesn't exist.
    /// Logs a warning if the file exists but can't be parsed.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::debug!("No config directory, using defaults");
            return Self::default();
        };
        if !path.exists() {
            log::debug!("No config file found, using defaults");
            return Self::default();
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Get the config file path.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_absent() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_parse_dataset_path() {
        let config: AppConfig = toml::from_str(r#"dataset_path = "shows/tour.csv""#).unwrap();
        assert_eq!(
            config.dataset_path.as_deref(),
            Some(std::path::Path::new("shows/tour.csv"))
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: AppConfig = toml::from_str("workers = 4").unwrap();
        assert!(config.dataset_path.is_none());
    }
}
