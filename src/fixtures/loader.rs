use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{NxlcError, Result};

use super::model::{EXPECTED_FILE, ExpectedFile, Fixture, FixtureKind};
use super::subdirs;

/// Loads the fixtures of one `<category>/<language>` directory.
///
/// A missing or unreadable `expected.json` yields no fixtures. Kinds without
/// an entry, or whose file is missing, are skipped.
#[must_use]
pub fn load_language_dir(dir: &Path) -> Vec<Fixture> {
    let expected_path = dir.join(EXPECTED_FILE);
    if !expected_path.is_file() {
        warn!(dir = %dir.display(), "No {EXPECTED_FILE} found, skipping");
        return Vec::new();
    }
    let expected = match ExpectedFile::read(&expected_path) {
        Ok(expected) => expected,
        Err(e) => {
            warn!("{e}, skipping");
            return Vec::new();
        }
    };

    let category = dir
        .parent()
        .and_then(Path::file_name)
        .map_or_else(|| expected.category.clone(), |n| n.to_string_lossy().into_owned());

    FixtureKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let entry = expected.entry(kind)?;
            let path = dir.join(&entry.filename);
            if !path.is_file() {
                warn!(path = %path.display(), "Fixture file missing, skipping");
                return None;
            }
            Some(Fixture {
                language: expected.language.clone(),
                category: category.clone(),
                kind,
                path,
                expected: entry.counts,
            })
        })
        .collect()
}

/// Loads every fixture under `root`, in category then language order.
///
/// # Errors
/// Returns an error if `root` is not a directory.
pub fn load_all(root: &Path) -> Result<Vec<Fixture>> {
    let fixtures: Vec<Fixture> = language_dirs(root)?
        .iter()
        .flat_map(|dir| load_language_dir(dir))
        .collect();
    debug!(count = fixtures.len(), root = %root.display(), "Loaded fixtures");
    Ok(fixtures)
}

/// Every `<category>/<language>` directory under `root`, sorted.
///
/// # Errors
/// Returns an error if `root` is not a directory.
pub fn language_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(NxlcError::Fixture {
            path: root.to_path_buf(),
            message: "fixtures directory does not exist".to_string(),
        });
    }
    Ok(subdirs(root).iter().flat_map(|c| subdirs(c)).collect())
}

/// The directory of the language named `name` (case-insensitive), searching
/// every category.
#[must_use]
pub fn find_language_dir(root: &Path, name: &str) -> Option<PathBuf> {
    let wanted = name.to_lowercase();
    subdirs(root).iter().flat_map(|c| subdirs(c)).find(|dir| {
        dir.file_name()
            .is_some_and(|n| n.to_string_lossy().to_lowercase() == wanted)
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
