use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{NxlcError, Result};

pub trait FileFilter {
    /// `path` is relative to the scan root when the file lies under it.
    fn should_include(&self, path: &Path) -> bool;
}

pub struct GlobFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// An empty extension list accepts every extension.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| NxlcError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder.build().map_err(|e| NxlcError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// A path is excluded when it or any of its parent directories matches.
    fn is_excluded(&self, path: &Path) -> bool {
        path.ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .any(|p| self.exclude_patterns.is_match(p))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
