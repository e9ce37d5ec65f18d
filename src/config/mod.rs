//! Configuration management.
//!
//! Settings live in a TOML file in the platform config directory
//! (`~/.config/tagpick/config.toml` on Linux). A missing file is not an
//! error; defaults apply.

mod settings;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use settings::{Settings, ThemePreference};

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The config directory could not be created.
    #[error("could not create configuration directory: {0}")]
    CreateDirError(std::io::Error),

    /// The config file could not be read.
    #[error("could not read configuration file: {0}")]
    ReadError(std::io::Error),

    /// The config file could not be written.
    #[error("could not write configuration file: {0}")]
    WriteError(std::io::Error),

    /// The config file is not valid TOML.
    #[error("could not parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The settings could not be serialized.
    #[error("could not serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// The loaded settings.
    pub settings: Settings,
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config_file_path()?)
    }

    /// Load the configuration from a specific file path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let settings = toml::from_str(&contents)?;
        Ok(Self { settings })
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        self.save_to(path)
    }

    /// Save the configuration to a specific file path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(&self.settings)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteError)
    }
}

/// Path to the config file in the platform config directory.
fn config_file_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("tagpick").join("config.toml"))
}
