//! Application configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[derive(Deserialize)]` generates the TOML conversion.
//! `#[serde(default)]` fills missing fields from `Default::default()`, so a
//! config file only needs the keys it wants to change.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::font::DEFAULT_SETTINGS_FILE;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window settings
    pub window: WindowConfig,

    /// File handling settings
    pub files: FileConfig,

    /// Editor behavior settings
    pub editor: EditorConfig,

    /// Keyboard settings
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("plume").join("config.toml"))
    }

    /// Path of the font settings file. Relative paths resolve against the
    /// working directory.
    pub fn settings_path(&self) -> PathBuf {
        PathBuf::from(&self.files.settings_file)
    }
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Application name shown in the title bar
    pub title: String,

    /// Initial width in logical pixels
    pub width: f32,

    /// Initial height in logical pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Plume".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

/// File handling configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Font settings file
    pub settings_file: String,

    /// Extension suggested by the save dialog
    pub default_extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            settings_file: DEFAULT_SETTINGS_FILE.to_string(),
            default_extension: "txt".to_string(),
        }
    }
}

/// Editor behavior configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Wrap long lines at word boundaries
    pub word_wrap: bool,

    /// Undo history limit
    pub undo_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            word_wrap: true,
            undo_limit: 100,
        }
    }
}

/// Keyboard configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Custom key bindings, key string to command id
    pub bindings: HashMap<String, String>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
