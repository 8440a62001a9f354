use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::counter::LineStats;
use crate::error::NxlcError;
use crate::language::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatistics {
    pub path: PathBuf,
    pub language: String,
    pub category: Category,
    pub stats: LineStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub language: String,
    pub category: Category,
    pub files: usize,
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LanguageStats {
    fn empty(language: &str, category: Category) -> Self {
        Self {
            language: language.to_string(),
            category,
            files: 0,
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    const fn add(&mut self, stats: LineStats) {
        self.files += 1;
        self.total += stats.total;
        self.code += stats.code;
        self.comment += stats.comment;
        self.blank += stats.blank;
    }

    /// Share of `total_lines` taken by this language, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Line counts stay far below f64 precision
    pub fn percentage(&self, total_lines: usize) -> f64 {
        if total_lines == 0 {
            0.0
        } else {
            self.total as f64 * 100.0 / total_lines as f64
        }
    }
}

/// Files that were seen but not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub unrecognized: usize,
    pub binary: usize,
    pub errors: usize,
}

impl SkipCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.unrecognized + self.binary + self.errors
    }
}

/// Ordering of the language table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Code,
    Total,
    Files,
    Name,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Total => "total",
            Self::Files => "files",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = NxlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(Self::Code),
            "total" | "lines" => Ok(Self::Total),
            "files" => Ok(Self::Files),
            "name" | "language" => Ok(Self::Name),
            _ => Err(NxlcError::Config(format!("Unknown sort key: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectStatistics {
    pub languages: Vec<LanguageStats>,
    pub files: Vec<FileStatistics>,
    pub totals: LineStats,
    pub skipped: SkipCounts,
}

impl ProjectStatistics {
    /// Aggregates per-file results. Files are ordered by path and the language
    /// table by code lines.
    #[must_use]
    pub fn new(mut files: Vec<FileStatistics>, skipped: SkipCounts) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let mut totals = LineStats::new();
        let mut by_language: IndexMap<&str, LanguageStats> = IndexMap::new();
        for file in &files {
            totals += file.stats;
            by_language
                .entry(file.language.as_str())
                .or_insert_with(|| LanguageStats::empty(&file.language, file.category))
                .add(file.stats);
        }
        let languages = by_language.into_values().collect();

        let mut project = Self {
            languages,
            files,
            totals,
            skipped,
        };
        project.sort_languages(SortKey::Code);
        project
    }

    /// Reorders the language table. Numeric keys sort descending; ties fall
    /// back to the language name.
    pub fn sort_languages(&mut self, key: SortKey) {
        self.languages.sort_by(|a, b| {
            let primary = match key {
                SortKey::Code => b.code.cmp(&a.code),
                SortKey::Total => b.total.cmp(&a.total),
                SortKey::Files => b.files.cmp(&a.files),
                SortKey::Name => std::cmp::Ordering::Equal,
            };
            primary.then_with(|| {
                a.language
                    .to_lowercase()
                    .cmp(&b.language.to_lowercase())
            })
        });
    }

    #[must_use]
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort_languages(key);
        self
    }

    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
