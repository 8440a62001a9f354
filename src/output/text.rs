use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::analysis::{LanguageStats, ProjectStatistics};
use crate::error::Result;

use super::StatsFormatter;
use super::path::display_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const BOLD_CYAN: &str = "\x1b[1;36m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

const NUMBER_WIDTH: usize = 10;
const PERCENT_WIDTH: usize = 8;
const MIN_NAME_WIDTH: usize = 12;

pub struct StatsTextFormatter {
    use_colors: bool,
    by_file: bool,
    project_root: Option<PathBuf>,
}

impl Default for StatsTextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl StatsTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
            by_file: false,
            project_root: None,
        }
    }

    /// List every counted file before the language table.
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

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_files(&self, out: &mut String, stats: &ProjectStatistics) {
        for file in &stats.files {
            writeln!(
                out,
                "{}: {} lines (code={}, comment={}, blank={}) [{}]",
                self.display_path(&file.path),
                file.stats.total,
                file.stats.code,
                file.stats.comment,
                file.stats.blank,
                file.language
            )
            .ok();
        }
        if !stats.files.is_empty() {
            writeln!(out).ok();
        }
    }

    fn write_table(&self, out: &mut String, stats: &ProjectStatistics) {
        let name_width = stats
            .languages
            .iter()
            .map(|l| l.language.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH);
        let rule = "-".repeat(name_width + 5 * NUMBER_WIDTH + PERCENT_WIDTH);

        let header = format!(
            "{:<name_width$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>PERCENT_WIDTH$}",
            "Language", "Files", "Total", "Code", "Comments", "Blank", "%"
        );
        writeln!(out, "{}", self.paint(&header, ansi::BOLD_CYAN)).ok();
        writeln!(out, "{rule}").ok();

        let total_lines = stats.totals.total;
        for language in &stats.languages {
            writeln!(out, "{}", language_row(language, total_lines, name_width)).ok();
        }

        writeln!(out, "{rule}").ok();
        let totals = stats.totals;
        let percent = if total_lines == 0 { "0.0" } else { "100.0" };
        writeln!(
            out,
            "{:<name_width$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>PERCENT_WIDTH$}",
            "Total",
            stats.total_files(),
            totals.total,
            totals.code,
            totals.comment,
            totals.blank,
            percent
        )
        .ok();
    }

    fn write_skipped(&self, out: &mut String, stats: &ProjectStatistics) {
        let skipped = stats.skipped;
        if skipped.total() == 0 {
            return;
        }
        let note = format!(
            "Skipped {} files ({} unrecognized, {} binary, {} unreadable)",
            skipped.total(),
            skipped.unrecognized,
            skipped.binary,
            skipped.errors
        );
        writeln!(out).ok();
        writeln!(out, "{}", self.paint(&note, ansi::YELLOW)).ok();
    }
}

fn language_row(language: &LanguageStats, total_lines: usize, name_width: usize) -> String {
    format!(
        "{:<name_width$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>NUMBER_WIDTH$}{:>PERCENT_WIDTH$.1}",
        language.language,
        language.files,
        language.total,
        language.code,
        language.comment,
        language.blank,
        language.percentage(total_lines)
    )
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let mut output = String::new();

        if stats.languages.is_empty() {
            writeln!(output, "No source files found.").ok();
            self.write_skipped(&mut output, stats);
            return Ok(output);
        }

        if self.by_file {
            self.write_files(&mut output, stats);
        }
        self.write_table(&mut output, stats);
        self.write_skipped(&mut output, stats);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
