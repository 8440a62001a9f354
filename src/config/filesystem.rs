//! Filesystem and environment access for the config loader, mockable in tests.

use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform configuration directory for nxlc:
    /// - Windows: `%APPDATA%\nxlc`
    /// - macOS: `~/Library/Application Support/nxlc`
    /// - Linux: `~/.config/nxlc` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;

    /// Value of an environment variable, if set and valid unicode.
    fn env_var(&self, key: &str) -> Option<String>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "nxlc").map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
