use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{NxlcError, Result};

use super::model::{EXPECTED_FILE, ExpectedFile, FixtureKind, LineCount};
use super::runner::LineCounter;
use super::subdirs;

/// One expected entry whose counts disagree with the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationChange {
    pub kind: FixtureKind,
    pub old: LineCount,
    pub new: LineCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationOutcome {
    pub language: String,
    pub dir: PathBuf,
    pub changes: Vec<CalibrationChange>,
    /// Whether `expected.json` was rewritten.
    pub written: bool,
}

impl CalibrationOutcome {
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Rewrites expected counts from what a [`LineCounter`] reports.
pub struct Calibrator<'a, C: LineCounter> {
    counter: &'a C,
}

impl<'a, C: LineCounter> Calibrator<'a, C> {
    #[must_use]
    pub const fn new(counter: &'a C) -> Self {
        Self { counter }
    }

    /// Recounts every fixture of one language directory.
    ///
    /// # Errors
    /// Returns an error if `expected.json` is missing or invalid, or cannot
    /// be written.
    pub fn calibrate_language(&self, dir: &Path, dry_run: bool) -> Result<CalibrationOutcome> {
        let expected_path = dir.join(EXPECTED_FILE);
        if !expected_path.is_file() {
            return Err(NxlcError::Fixture {
                path: dir.to_path_buf(),
                message: format!("no {EXPECTED_FILE}"),
            });
        }
        let mut expected = ExpectedFile::read(&expected_path)?;
        let language = expected.language.clone();

        let mut changes = Vec::new();
        for kind in FixtureKind::ALL {
            let Some(entry) = expected.entry_mut(kind) else {
                continue;
            };
            let path = dir.join(&entry.filename);
            if !path.is_file() {
                warn!(path = %path.display(), "Fixture file missing, not calibrated");
                continue;
            }
            let actual = self.counter.count_file(&path)?;
            if actual != entry.counts {
                info!(
                    language = %language,
                    %kind,
                    old = %entry.counts,
                    new = %actual,
                    "Calibrating"
                );
                changes.push(CalibrationChange {
                    kind,
                    old: entry.counts,
                    new: actual,
                });
                entry.counts = actual;
            }
        }

        let written = !changes.is_empty() && !dry_run;
        if written {
            expected.write(&expected_path)?;
        }
        Ok(CalibrationOutcome {
            language,
            dir: dir.to_path_buf(),
            changes,
            written,
        })
    }

    /// Calibrates every language directory of a category. Directories without
    /// a usable `expected.json` are logged and skipped.
    ///
    /// # Errors
    /// Returns an error if a counter or write fails.
    pub fn calibrate_category(&self, dir: &Path, dry_run: bool) -> Result<Vec<CalibrationOutcome>> {
        let mut outcomes = Vec::new();
        for language_dir in subdirs(dir) {
            match self.calibrate_language(&language_dir, dry_run) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e @ NxlcError::Fixture { .. }) => warn!("{e}, skipping"),
                Err(e) => return Err(e),
            }
        }
        Ok(outcomes)
    }

    /// # Errors
    /// Returns an error if `root` is not a directory, or a counter or write fails.
    pub fn calibrate_all(&self, root: &Path, dry_run: bool) -> Result<Vec<CalibrationOutcome>> {
        if !root.is_dir() {
            return Err(NxlcError::Fixture {
                path: root.to_path_buf(),
                message: "fixtures directory does not exist".to_string(),
            });
        }
        let mut outcomes = Vec::new();
        for category in subdirs(root) {
            outcomes.extend(self.calibrate_category(&category, dry_run)?);
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
#[path = "calibrate_tests.rs"]
mod tests;
