//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DemodriveError, DemodriveResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default composition settings.
    pub composition: CompositionDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Defaults applied when a sync request leaves a parameter unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionDefaults {
    /// Timeline frame rate.
    pub fps: u32,

    /// Output aspect ratio (`"16:9"`, `"9:16"` or `"1:1"`).
    pub aspect_ratio: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "demodrive_sync_core=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for CompositionDefaults {
    fn default() -> Self {
        Self {
            fps: 30,
            aspect_ratio: "16:9".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path. Missing or malformed files are errors.
    pub fn load_from(path: impl AsRef<Path>) -> DemodriveResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DemodriveError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        if config.composition.fps == 0 {
            return Err(DemodriveError::config(format!(
                "composition.fps must be positive in {}",
                path.display()
            )));
        }
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> DemodriveResult<()> {
        self.save_to(config_file_path())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> DemodriveResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("demodrive").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.composition.fps, 30);
        assert_eq!(config.composition.aspect_ratio, "16:9");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"composition":{"fps":24}}"#).unwrap();
        assert_eq!(config.composition.fps, 24);
        assert_eq!(config.composition.aspect_ratio, "16:9");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = std::env::temp_dir().join("demodrive_test_config");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.composition.aspect_ratio = "9:16".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.composition.aspect_ratio, "9:16");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("demodrive_no_such_config.json");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, DemodriveError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_from_rejects_zero_fps() {
        let dir = std::env::temp_dir().join("demodrive_test_config_zero_fps");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"composition":{"fps":0}}"#).unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, DemodriveError::Config { .. }));

        std::fs::remove_dir_all(&dir).ok();
    }
}
