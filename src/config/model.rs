use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{NxlcError, Result};
use crate::language::Category;

/// Overrides `[fixtures] dir`.
pub const ENV_FIXTURE_DIR: &str = "NXLC_FIXTURE_DIR";
/// Overrides `[fixtures] workers`.
pub const ENV_WORKERS: &str = "NXLC_WORKERS";

pub const DEFAULT_FIXTURE_DIR: &str = "tests/fixtures";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra languages, keyed by display name.
    #[serde(default)]
    pub languages: HashMap<String, CustomLanguageConfig>,

    #[serde(default)]
    pub fixtures: FixturesConfig,
}

/// Directory traversal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub follow_links: bool,

    /// Exclude globs, added to whatever `-x` passes on the command line.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            hidden: false,
            follow_links: false,
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// `text` or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// `code`, `total`, `files` or `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub filenames: Vec<String>,

    #[serde(default)]
    pub single_line_comments: Vec<String>,

    #[serde(default)]
    pub multi_line_comments: Vec<(String, String)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixturesConfig {
    #[serde(default = "default_fixture_dir")]
    pub dir: PathBuf,

    /// Worker threads for `fixtures verify`.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Relative tolerance for verification, 0 meaning exact.
    #[serde(default)]
    pub tolerance: f64,

    /// Per-language tolerance, keyed by language name.
    #[serde(default)]
    pub language_tolerance: HashMap<String, f64>,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            dir: default_fixture_dir(),
            workers: default_workers(),
            tolerance: 0.0,
            language_tolerance: HashMap::new(),
        }
    }
}

impl Config {
    /// Apply `NXLC_FIXTURE_DIR` and `NXLC_WORKERS` from `lookup`.
    ///
    /// # Errors
    /// Returns an error if `NXLC_WORKERS` is not a number.
    pub fn apply_env_overrides<L>(&mut self, lookup: L) -> Result<()>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_FIXTURE_DIR).filter(|d| !d.is_empty()) {
            tracing::debug!(%dir, "fixture dir from {ENV_FIXTURE_DIR}");
            self.fixtures.dir = PathBuf::from(dir);
        }
        if let Some(workers) = lookup(ENV_WORKERS) {
            self.fixtures.workers = workers.trim().parse().map_err(|_| {
                NxlcError::Config(format!(
                    "{ENV_WORKERS} must be a positive integer, got '{workers}'"
                ))
            })?;
        }
        Ok(())
    }
}

const fn default_true() -> bool {
    true
}

fn default_fixture_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURE_DIR)
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(4, std::num::NonZeroUsize::get)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
