//! Fixture corpus tooling: generation, validation, calibration, end-to-end
//! verification of the counter and performance regression checks.
//!
//! Fixtures live under `<root>/<category>/<language>/`, one file per
//! [`FixtureKind`] plus an `expected.json` with the counts each file should
//! produce.

mod calibrate;
mod generator;
mod loader;
mod model;
mod perf;
pub mod runner;
pub mod template;
pub mod validate;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use calibrate::{CalibrationChange, CalibrationOutcome, Calibrator};
pub use generator::FixtureGenerator;
pub use loader::{find_language_dir, language_dirs, load_all, load_language_dir};
pub use model::{EXPECTED_FILE, ExpectedEntry, ExpectedFile, Fixture, FixtureKind, LineCount};
pub use perf::{
    Baseline, BaselineFile, Baselines, PerformanceCheck, PerformanceChecker, Regression, Thresholds,
};

/// Immediate subdirectories of `dir`, sorted by name. Empty when `dir` is
/// missing or unreadable.
pub(crate) fn subdirs(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(walkdir::DirEntry::into_path)
        .collect()
}
