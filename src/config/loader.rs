use std::path::{Path, PathBuf};

use crate::error::{DarkGuardError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::Config;

pub const LOCAL_CONFIG_NAME: &str = ".dark-guard.toml";
pub const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.dark-guard.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()`
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let discovered = [self.local_config_path(), self.user_config_path()]
            .into_iter()
            .flatten()
            .find(|path| self.fs.exists(path));

        match discovered {
            Some(path) => self.load_from_path(&path),
            None => {
                tracing::debug!(
                    target: "dark_guard::config",
                    "no config file found, using defaults"
                );
                Ok(Config::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| DarkGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Self::parse_config(&content)?;
        tracing::info!(target: "dark_guard::config", path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
