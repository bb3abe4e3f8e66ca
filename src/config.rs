//! Configuration loading and saving.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/trajview/config.toml` on Linux). A missing file yields the
//! reference defaults; CLI flags override file values at the command layer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Reference asset folder the trajectory export writes into.
const DEFAULT_FOLDER: &str = "resources/images/optim/traj_evolution/";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory for this platform")]
    NoConfigDir,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Player configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder prefix frame paths are resolved against. Joined to filenames
    /// by concatenation, so it should carry its trailing separator.
    pub folder: String,
    /// Total number of base frames in the trajectory.
    pub frame_count: u32,
    /// Number of auxiliary optimization variants interleaved for the first
    /// `detail_count` base frames.
    pub detail_count: u32,
    /// Autoplay advance period in milliseconds.
    pub tick_interval_ms: u64,
    /// Pause at the end of each full cycle before looping, in milliseconds.
    pub loop_pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: DEFAULT_FOLDER.to_string(),
            frame_count: 40,
            detail_count: 5,
            tick_interval_ms: 100,
            loop_pause_ms: 2500,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("trajview").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the configuration to the default path, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Write the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
