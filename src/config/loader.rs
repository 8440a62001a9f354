use std::path::{Path, PathBuf};

use crate::error::{NxlcError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config;
use super::Config;

/// A loaded configuration and the file it came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".nxlc.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.nxlc.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()`
///
/// Environment overrides apply on top of whichever source wins.
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

    /// Built-in defaults plus environment overrides, for `--no-config`.
    ///
    /// # Errors
    /// Returns an error if an environment override is invalid.
    pub fn defaults(&self) -> Result<LoadResult> {
        self.finish(Config::default(), None)
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
        toml::from_str(content).map_err(NxlcError::from)
    }

    fn finish(&self, mut config: Config, source: Option<PathBuf>) -> Result<LoadResult> {
        config.apply_env_overrides(|key| self.fs.env_var(key))?;
        validate_config(&config)?;
        Ok(LoadResult { config, source })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.load_from_path(&path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        self.defaults()
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| NxlcError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        self.finish(config, Some(path.to_path_buf()))
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
