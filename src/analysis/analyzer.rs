use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::counter::SlocCounter;
use crate::error::{NxlcError, Result};
use crate::language::LanguageRegistry;
use crate::output::ScanProgress;
use crate::scanner::{BINARY_SNIFF_LEN, FileScanner, is_binary};

use super::{FileStatistics, ProjectStatistics, SkipCounts};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of looking at a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Counted(FileStatistics),
    Unrecognized,
    Binary,
}

/// Detect the language of `path` and count its lines.
///
/// Only the first 8 KiB are read before deciding whether the file is binary
/// or in an unknown language; the rest is streamed through the counter.
///
/// # Errors
/// Returns `NxlcError::FileRead` if the file cannot be opened or read.
pub fn analyze_file(path: &Path, registry: &LanguageRegistry) -> Result<FileOutcome> {
    let read_error = |source| NxlcError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut reader = BufReader::with_capacity(BINARY_SNIFF_LEN, file);
    let head = reader.fill_buf().map_err(read_error)?;

    if is_binary(head) {
        return Ok(FileOutcome::Binary);
    }

    let text = head.strip_prefix(UTF8_BOM).unwrap_or(head);
    let first_line = text.starts_with(b"#!").then(|| {
        let end = text.iter().position(|&b| b == b'\n').unwrap_or(text.len());
        String::from_utf8_lossy(&text[..end]).into_owned()
    });

    let Some(language) = registry.detect(path, first_line.as_deref()) else {
        return Ok(FileOutcome::Unrecognized);
    };

    let stats = SlocCounter::new(language)
        .count_reader(reader)
        .map_err(read_error)?;

    Ok(FileOutcome::Counted(FileStatistics {
        path: path.to_path_buf(),
        language: language.name.clone(),
        category: language.category,
        stats,
    }))
}

/// Scans roots, counts every recognised file in parallel and aggregates.
pub struct Analyzer<'a, S: FileScanner> {
    scanner: S,
    registry: &'a LanguageRegistry,
    quiet: bool,
}

impl<'a, S: FileScanner + Sync> Analyzer<'a, S> {
    #[must_use]
    pub const fn new(scanner: S, registry: &'a LanguageRegistry) -> Self {
        Self {
            scanner,
            registry,
            quiet: false,
        }
    }

    /// Hide the progress bar.
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Collect the files under every root, without duplicates.
    ///
    /// # Errors
    /// Returns an error if a root does not exist.
    pub fn collect_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in paths {
            files.extend(self.scanner.scan(root)?);
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    /// # Errors
    /// Returns an error if a root does not exist. Per-file read errors are
    /// logged and counted in [`SkipCounts::errors`] instead.
    pub fn run(&self, paths: &[PathBuf]) -> Result<ProjectStatistics> {
        let files = self.collect_files(paths)?;
        tracing::info!(files = files.len(), "counting files");

        let progress = ScanProgress::new(files.len() as u64, self.quiet);
        let outcomes: Vec<Result<FileOutcome>> = files
            .par_iter()
            .map(|path| {
                let outcome = analyze_file(path, self.registry);
                progress.inc();
                outcome
            })
            .collect();
        progress.finish();

        Ok(aggregate(outcomes))
    }
}

fn aggregate(outcomes: Vec<Result<FileOutcome>>) -> ProjectStatistics {
    let mut skipped = SkipCounts::default();
    let mut counted = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        match outcome {
            Ok(FileOutcome::Counted(file)) => counted.push(file),
            Ok(FileOutcome::Unrecognized) => skipped.unrecognized += 1,
            Ok(FileOutcome::Binary) => skipped.binary += 1,
            Err(err) => {
                tracing::warn!("{err}");
                skipped.errors += 1;
            }
        }
    }

    tracing::debug!(
        counted = counted.len(),
        unrecognized = skipped.unrecognized,
        binary = skipped.binary,
        errors = skipped.errors,
        "aggregated results"
    );
    ProjectStatistics::new(counted, skipped)
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
