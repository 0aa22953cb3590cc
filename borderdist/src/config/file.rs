//! Reading and writing `~/.borderdist/config.ini`.
//!
//! A missing file is not an error: every setting has a default in
//! [`super::defaults`]. The INI mapping itself is in [`super::parser`] and
//! [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;

/// Errors raised while reading, validating or writing config.ini.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The file exists but is not valid INI
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// The file could not be written
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// A key parsed but its value is unusable
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// `~/.borderdist` could not be created
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Read `~/.borderdist/config.ini`, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Read the INI file at `path`.
    ///
    /// A nonexistent path yields [`ConfigFile::default`]; keys missing from
    /// an existing file keep their defaults too.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        let config = super::parser::parse_ini(&ini)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Write these settings to `~/.borderdist/config.ini`.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Write these settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Write a config.ini holding the defaults unless one is already there.
    ///
    /// An existing file is left untouched. Returns its path either way.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }
}

/// `~/.borderdist`, or `./.borderdist` when no home directory is known.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".borderdist")
}

/// `config.ini` inside [`config_directory`].
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
