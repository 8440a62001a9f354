use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{NxlcError, Result};

use super::outcome::{OutcomeRecord, Status, TestOutcome};

const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
}

/// Aggregate of a verification run. Times are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub skipped: usize,
    /// Percentage, 0 to 100.
    pub pass_rate: f64,
    pub by_category: BTreeMap<String, CategorySummary>,
    pub total_execution_time: f64,
    pub average_execution_time: f64,
    pub fastest: f64,
    pub slowest: f64,
}

impl Summary {
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    /// Seconds since the Unix epoch.
    timestamp: u64,
    summary: &'a Summary,
    results: Vec<OutcomeRecord>,
}

/// Renders verification results. Paths are shown relative to the fixtures root.
#[derive(Debug, Clone)]
pub struct Reporter {
    root: PathBuf,
}

impl Reporter {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Result counts are small
    pub fn summary(results: &[TestOutcome]) -> Summary {
        let mut summary = Summary {
            total: results.len(),
            ..Summary::default()
        };

        for outcome in results {
            let category = summary
                .by_category
                .entry(outcome.fixture.category.clone())
                .or_default();
            category.total += 1;
            match outcome.status {
                Status::Passed => {
                    summary.passed += 1;
                    category.passed += 1;
                }
                Status::Failed => {
                    summary.failed += 1;
                    category.failed += 1;
                }
                Status::Error => {
                    summary.errors += 1;
                    category.errors += 1;
                }
                Status::Skipped => summary.skipped += 1,
                Status::Pending | Status::Running => {}
            }
        }

        if summary.total > 0 {
            summary.pass_rate = summary.passed as f64 / summary.total as f64 * 100.0;
            let times: Vec<f64> = results.iter().map(|r| r.duration.as_secs_f64()).collect();
            summary.total_execution_time = times.iter().sum();
            summary.average_execution_time = summary.total_execution_time / times.len() as f64;
            summary.fastest = times.iter().copied().fold(f64::INFINITY, f64::min);
            summary.slowest = times.iter().copied().fold(0.0, f64::max);
        }
        summary
    }

    #[must_use]
    pub fn detailed_report(&self, results: &[TestOutcome]) -> String {
        let summary = Self::summary(results);
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        writeln!(out, "{rule}\nE2E LINE COUNTING TEST REPORT\n{rule}").ok();
        writeln!(out, "\nTotal Tests: {}", summary.total).ok();
        writeln!(out, "Passed: {}", summary.passed).ok();
        writeln!(out, "Failed: {}", summary.failed).ok();
        writeln!(out, "Errors: {}", summary.errors).ok();
        writeln!(out, "Skipped: {}", summary.skipped).ok();
        writeln!(out, "Pass Rate: {:.1}%", summary.pass_rate).ok();

        writeln!(out, "\nBy Category:").ok();
        for (category, counts) in &summary.by_category {
            writeln!(
                out,
                "  {category}: {}/{} passed, {} failed, {} errors",
                counts.passed, counts.total, counts.failed, counts.errors
            )
            .ok();
        }

        writeln!(out, "\nPerformance:").ok();
        writeln!(out, "  Total Time: {:.3}s", summary.total_execution_time).ok();
        writeln!(out, "  Average Time: {:.2}ms", summary.average_execution_time * 1000.0).ok();
        writeln!(out, "  Fastest: {:.2}ms", summary.fastest * 1000.0).ok();
        writeln!(out, "  Slowest: {:.2}ms", summary.slowest * 1000.0).ok();

        self.write_problems(&mut out, results, Status::Failed, "Failed Tests");
        self.write_problems(&mut out, results, Status::Error, "Errors");

        writeln!(out, "\n{rule}").ok();
        out
    }

    fn write_problems(
        &self,
        out: &mut String,
        results: &[TestOutcome],
        status: Status,
        title: &str,
    ) {
        let problems: Vec<&TestOutcome> = results.iter().filter(|r| r.status == status).collect();
        if problems.is_empty() {
            return;
        }
        writeln!(out, "\n{title}:").ok();
        for outcome in problems {
            let record = outcome.record(&self.root);
            writeln!(
                out,
                "  - {} ({}) {}: {}",
                record.language,
                record.fixture_type,
                record.file,
                record.error.as_deref().unwrap_or("unknown error")
            )
            .ok();
        }
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn json_report(&self, results: &[TestOutcome]) -> Result<String> {
        let summary = Self::summary(results);
        let report = JsonReport {
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
            summary: &summary,
            results: results.iter().map(|r| r.record(&self.root)).collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_json_report(&self, results: &[TestOutcome], path: &Path) -> Result<()> {
        let json = self.json_report(results)?;
        std::fs::write(path, json).map_err(|source| NxlcError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
