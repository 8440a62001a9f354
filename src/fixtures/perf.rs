use std::fmt::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{NxlcError, Result};

const RULE_WIDTH: usize = 60;
pub const DEFAULT_MIN_PASS_RATE: f64 = 99.5;

/// Recorded performance of a previous run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub avg_execution_time_ms: f64,
    pub total_execution_time_s: f64,
    pub total_fixtures: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Overrides the threshold passed to [`PerformanceChecker::check`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regression_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pass_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Baselines {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<Baseline>,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The baseline document. Unknown keys survive an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baselines: Option<Baselines>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The part of a verification report the checker reads.
#[derive(Debug, Deserialize)]
struct ResultsFile {
    #[serde(default)]
    summary: ResultsSummary,
}

#[derive(Debug, Deserialize)]
struct ResultsSummary {
    #[serde(default)]
    total: usize,
    #[serde(default = "full_pass_rate")]
    pass_rate: f64,
    #[serde(default)]
    total_execution_time: f64,
    #[serde(default)]
    average_execution_time: f64,
}

impl Default for ResultsSummary {
    fn default() -> Self {
        Self {
            total: 0,
            pass_rate: full_pass_rate(),
            total_execution_time: 0.0,
            average_execution_time: 0.0,
        }
    }
}

const fn full_pass_rate() -> f64 {
    100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Regression {
    pub metric: String,
    pub baseline: f64,
    pub current: f64,
    /// Absent for the pass-rate floor.
    pub increase_percent: Option<f64>,
    pub threshold: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceCheck {
    pub current: IndexMap<String, f64>,
    pub baseline: IndexMap<String, f64>,
    pub regressions: Vec<Regression>,
}

impl PerformanceCheck {
    #[must_use]
    pub fn has_regression(&self) -> bool {
        !self.regressions.is_empty()
    }
}

/// Compares a verification report with a stored baseline.
#[derive(Debug, Clone)]
pub struct PerformanceChecker {
    baseline_path: PathBuf,
    results_path: PathBuf,
}

impl PerformanceChecker {
    #[must_use]
    pub fn new(baseline_path: impl Into<PathBuf>, results_path: impl Into<PathBuf>) -> Self {
        Self {
            baseline_path: baseline_path.into(),
            results_path: results_path.into(),
        }
    }

    /// `None` when the baseline file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_baseline(&self) -> Result<Option<BaselineFile>> {
        if !self.baseline_path.exists() {
            warn!(path = %self.baseline_path.display(), "Baseline file not found");
            return Ok(None);
        }
        read_json(&self.baseline_path).map(Some)
    }

    fn load_results(&self) -> Result<ResultsSummary> {
        if !self.results_path.exists() {
            return Err(NxlcError::Config(format!(
                "Results file not found: {}",
                self.results_path.display()
            )));
        }
        read_json::<ResultsFile>(&self.results_path).map(|file| file.summary)
    }

    /// Checks average and total time against `threshold` percent, and the
    /// pass rate against the baseline's minimum. Without a baseline nothing
    /// regresses.
    ///
    /// # Errors
    /// Returns an error if the results or baseline cannot be read.
    pub fn check(&self, threshold: f64) -> Result<PerformanceCheck> {
        let summary = self.load_results()?;
        let Some(baselines) = self.load_baseline()?.and_then(|file| file.baselines) else {
            info!("No baseline data available for comparison");
            return Ok(PerformanceCheck::default());
        };

        let threshold = baselines.thresholds.regression_percentage.unwrap_or(threshold);
        let overall = baselines.overall.unwrap_or_default();
        let mut check = PerformanceCheck::default();

        let timings = [
            (
                "average_execution_time",
                summary.average_execution_time,
                overall.avg_execution_time_ms / 1000.0,
            ),
            (
                "total_execution_time",
                summary.total_execution_time,
                overall.total_execution_time_s,
            ),
        ];
        for (metric, current, baseline) in timings {
            check.current.insert(metric.to_string(), current);
            check.baseline.insert(metric.to_string(), baseline);
            if baseline <= 0.0 {
                continue;
            }
            let increase = (current - baseline) / baseline * 100.0;
            if increase > threshold {
                check.regressions.push(Regression {
                    metric: metric.to_string(),
                    baseline,
                    current,
                    increase_percent: Some(increase),
                    threshold,
                });
            }
        }

        let min_pass_rate = baselines
            .thresholds
            .min_pass_rate
            .unwrap_or(DEFAULT_MIN_PASS_RATE);
        check.current.insert("pass_rate".to_string(), summary.pass_rate);
        check.baseline.insert("min_pass_rate".to_string(), min_pass_rate);
        if summary.pass_rate < min_pass_rate {
            check.regressions.push(Regression {
                metric: "pass_rate".to_string(),
                baseline: min_pass_rate,
                current: summary.pass_rate,
                increase_percent: None,
                threshold: min_pass_rate,
            });
        }
        Ok(check)
    }

    /// Replaces the baseline's `overall` figures with the current results,
    /// keeping thresholds and any other keys.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read, parsed or written.
    pub fn update_baseline(&self) -> Result<()> {
        let summary = self.load_results()?;
        let mut file = self.load_baseline()?.unwrap_or_default();
        let baselines = file.baselines.get_or_insert_with(Baselines::default);
        baselines.overall = Some(Baseline {
            avg_execution_time_ms: summary.average_execution_time * 1000.0,
            total_execution_time_s: summary.total_execution_time,
            total_fixtures: summary.total,
        });

        let mut json = serde_json::to_string_pretty(&file)?;
        json.push('\n');
        std::fs::write(&self.baseline_path, json).map_err(|source| NxlcError::FileWrite {
            path: self.baseline_path.clone(),
            source,
        })?;
        info!(path = %self.baseline_path.display(), "Baseline updated");
        Ok(())
    }

    /// Text report. `details` adds the current and baseline figures.
    #[must_use]
    pub fn report(check: &PerformanceCheck, details: bool) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();
        writeln!(out, "{rule}\nPERFORMANCE REGRESSION CHECK\n{rule}").ok();

        if details {
            writeln!(out, "\nCurrent Performance:").ok();
            for (metric, value) in &check.current {
                writeln!(out, "  {metric}: {value:.3}").ok();
            }
            writeln!(out, "\nBaseline Performance:").ok();
            for (metric, value) in &check.baseline {
                writeln!(out, "  {metric}: {value:.3}").ok();
            }
        }

        if check.has_regression() {
            writeln!(out, "\nPERFORMANCE REGRESSIONS DETECTED:").ok();
            for regression in &check.regressions {
                writeln!(out, "\n  {}:", regression.metric).ok();
                writeln!(out, "    Baseline: {:.3}", regression.baseline).ok();
                writeln!(out, "    Current: {:.3}", regression.current).ok();
                if let Some(increase) = regression.increase_percent {
                    writeln!(out, "    Increase: {increase:.1}%").ok();
                }
                writeln!(out, "    Threshold: {:.1}%", regression.threshold).ok();
            }
        } else {
            writeln!(out, "\nNo performance regressions detected").ok();
        }

        writeln!(out, "\n{rule}").ok();
        out
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| NxlcError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
#[path = "perf_tests.rs"]
mod tests;
