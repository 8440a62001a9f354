use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analysis::{ProjectStatistics, SkipCounts};
use crate::error::Result;
use crate::language::Category;

use super::StatsFormatter;
use super::path::display_path;

pub struct StatsJsonFormatter {
    by_file: bool,
    project_root: Option<PathBuf>,
}

impl StatsJsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            by_file: false,
            project_root: None,
        }
    }

    /// Include the per-file list under `"files"`.
    #[must_use]
    pub const fn with_by_file(mut self, by_file: bool) -> Self {
        self.by_file = by_file;
        self
    }

    #[must_use]
    pub fn with_project_root(mut self, root: Option<PathBuf>) -> Self {
        self.project_root = root;
        self
    }

    fn display_path(&self, path: &Path) -> String {
        display_path(path, self.project_root.as_deref())
    }
}

impl Default for StatsJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonStatsOutput<'a> {
    summary: JsonSummary,
    languages: Vec<JsonLanguage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<JsonFile<'a>>>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    languages: usize,
    total: usize,
    code: usize,
    comment: usize,
    blank: usize,
    skipped: SkipCounts,
}

#[derive(Serialize)]
struct JsonLanguage<'a> {
    language: &'a str,
    category: Category,
    files: usize,
    total: usize,
    code: usize,
    comment: usize,
    blank: usize,
    percentage: f64,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    language: &'a str,
    total: usize,
    code: usize,
    comment: usize,
    blank: usize,
}

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let total_lines = stats.totals.total;
        let languages = stats
            .languages
            .iter()
            .map(|l| JsonLanguage {
                language: &l.language,
                category: l.category,
                files: l.files,
                total: l.total,
                code: l.code,
                comment: l.comment,
                blank: l.blank,
                percentage: (l.percentage(total_lines) * 100.0).round() / 100.0,
            })
            .collect();

        let files = self.by_file.then(|| {
            stats
                .files
                .iter()
                .map(|f| JsonFile {
                    path: self.display_path(&f.path),
                    language: &f.language,
                    total: f.stats.total,
                    code: f.stats.code,
                    comment: f.stats.comment,
                    blank: f.stats.blank,
                })
                .collect()
        });

        let output = JsonStatsOutput {
            summary: JsonSummary {
                files: stats.total_files(),
                languages: stats.languages.len(),
                total: stats.totals.total,
                code: stats.totals.code,
                comment: stats.totals.comment,
                blank: stats.totals.blank,
                skipped: stats.skipped,
            },
            languages,
            files,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
