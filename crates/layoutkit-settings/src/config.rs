//! Configuration management for LayoutKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (surface size used for random placement, seed count)
//! - Storage settings (where users and layouts are persisted)

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config/data directories
const APP_DIR: &str = "layoutkit";

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Drawing surface width in pixels
    pub width: f64,
    /// Drawing surface height in pixels
    pub height: f64,
    /// Number of random shapes placed on a fresh canvas
    pub seed_count: usize,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            seed_count: 10,
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the `users`, `user` and `layouts` values
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: Config::default_data_dir(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas settings
    pub canvas: CanvasSettings,
    /// Storage settings
    pub storage: StorageSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform data directory for LayoutKit (falls back to the working directory)
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Platform location of the config file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = |key: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
        };

        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                key: "storage.data_dir".to_string(),
                value: String::new(),
            });
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}
