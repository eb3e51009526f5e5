//! Configuration module for findplace
//!
//! Manages application configuration: which files count as audio, how the
//! interactive search presents itself, and whether deletions are confirmed.
//! Configuration is stored in the user's config directory.

use crate::playlist::{DEFAULT_AUDIO_EXTENSIONS, DirectoryPlaylist, PlaylistError};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FindPlaceConfig {
    /// File extensions treated as audio segments
    #[serde(default = "default_audio_extensions")]
    pub audio_extensions: Vec<String>,

    /// Glob patterns (against `relative/dir/name`) excluded from listings
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Ask before deleting segments that precede the located position
    #[serde(default = "default_true")]
    pub confirm_deletions: bool,

    /// Log deletions instead of performing them
    #[serde(default)]
    pub dry_run: bool,

    /// Open each probe in the system's default player
    #[serde(default)]
    pub open_probes: bool,

    /// Segments shown on each side of the probe
    #[serde(default = "default_context")]
    pub context: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_audio_extensions() -> Vec<String> {
    DEFAULT_AUDIO_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

const fn default_true() -> bool {
    true
}

const fn default_context() -> usize {
    5
}

impl Default for FindPlaceConfig {
    fn default() -> Self {
        Self {
            audio_extensions: default_audio_extensions(),
            ignore_patterns: Vec::new(),
            confirm_deletions: true,
            dry_run: false,
            open_probes: false,
            context: default_context(),
            quiet: false,
        }
    }
}

impl FindPlaceConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("findplace").join("config.toml"))
    }

    /// Load configuration from the user config directory, creating a default if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Playlist source honouring the configured extensions and ignore patterns
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::InvalidPattern` if an ignore pattern does not parse.
    pub fn playlist(&self) -> Result<DirectoryPlaylist, PlaylistError> {
        DirectoryPlaylist::new(&self.audio_extensions).with_ignore_patterns(&self.ignore_patterns)
    }
}
