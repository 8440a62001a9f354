use std::path::Path;

use crate::analysis::{FileOutcome, analyze_file};
use crate::error::{NxlcError, Result};
use crate::fixtures::model::LineCount;
use crate::language::LanguageRegistry;

/// Counts the lines of one file.
pub trait LineCounter: Sync {
    /// # Errors
    /// Returns an error if the file cannot be read or counted.
    fn count_file(&self, path: &Path) -> Result<LineCount>;
}

/// Counts with the built-in counter, detecting the language from the path.
#[derive(Debug, Clone, Copy)]
pub struct RegistryLineCounter<'a> {
    registry: &'a LanguageRegistry,
}

impl<'a> RegistryLineCounter<'a> {
    #[must_use]
    pub const fn new(registry: &'a LanguageRegistry) -> Self {
        Self { registry }
    }
}

impl LineCounter for RegistryLineCounter<'_> {
    fn count_file(&self, path: &Path) -> Result<LineCount> {
        match analyze_file(path, self.registry)? {
            FileOutcome::Counted(file) => Ok(file.stats.into()),
            FileOutcome::Unrecognized => {
                Err(NxlcError::UnknownLanguage(path.display().to_string()))
            }
            FileOutcome::Binary => Err(NxlcError::Fixture {
                path: path.to_path_buf(),
                message: "binary file".to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
