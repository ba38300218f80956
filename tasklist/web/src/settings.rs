use serde::{Deserialize, Serialize};
use tasklist_core::storage::StorageKeys;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

/// Application settings, compiled into the web bundle from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub storage: StorageConfig,
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub tasks_key: String,
    pub theme_key: String,
}

/// Cosmetic animation timing. Disabling motion makes every intent apply
/// immediately.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionConfig {
    pub enabled: bool,
    pub add_feedback_ms: u32,
    pub delete_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "info".to_string(),
            storage: StorageConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let keys = StorageKeys::default();
        StorageConfig {
            tasks_key: keys.tasks,
            theme_key: keys.display_mode,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            enabled: true,
            add_feedback_ms: 200,
            delete_delay_ms: 200,
        }
    }
}

impl AppConfig {
    /// Loads the embedded configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Configured log level, falling back to `INFO` for unknown names.
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            tasks: self.storage.tasks_key.clone(),
            display_mode: self.storage.theme_key.clone(),
        }
    }
}

impl MotionConfig {
    /// Delay before a deleted task is removed, or `None` when motion is off.
    pub fn delete_delay(&self) -> Option<u32> {
        (self.enabled && self.delete_delay_ms > 0).then_some(self.delete_delay_ms)
    }

    /// How long the add button shows its feedback state, or `None` when motion is off.
    pub fn add_feedback(&self) -> Option<u32> {
        (self.enabled && self.add_feedback_ms > 0).then_some(self.add_feedback_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = AppConfig::load().unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_deserialize_from_toml() {
        // Arrange
        let toml_str = r#"
            log_level = "debug"
            [storage]
            tasks_key = "my_todos"
            theme_key = "my_theme"
            [motion]
            enabled = false
            add_feedback_ms = 100
            delete_delay_ms = 300
        "#;

        // Act
        let config: AppConfig = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(config.storage_keys().tasks, "my_todos");
        assert_eq!(config.storage_keys().display_mode, "my_theme");
        assert_eq!(config.motion.delete_delay(), None);
        assert_eq!(config.motion.add_feedback(), None);
    }

    #[test]
    fn test_config_missing_sections_use_defaults() {
        // Arrange
        let toml_str = r#"
            [motion]
            delete_delay_ms = 500
        "#;

        // Act
        let config = AppConfig::from_toml(toml_str).unwrap();

        // Assert
        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.motion.delete_delay(), Some(500));
        assert_eq!(config.motion.add_feedback(), Some(200));
    }

    #[test]
    fn test_config_unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };

        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        let toml_str = r#"
            [motion]
            enabled = "sometimes"
        "#;

        assert!(AppConfig::from_toml(toml_str).is_err());
    }
}
