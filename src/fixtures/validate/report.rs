use std::collections::BTreeMap;
use std::fmt::Write;

use serde_json::json;

use crate::error::Result;

use super::types::{ValidationIssue, ValidationLevel, ValidationType};

const RULE_WIDTH: usize = 60;
const ISSUES_PER_LEVEL: usize = 10;

/// Issues collected by a validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.issues.extend(issues);
    }

    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    #[must_use]
    pub fn count(&self, level: ValidationLevel) -> usize {
        self.issues.iter().filter(|i| i.level == level).count()
    }

    #[must_use]
    pub fn count_type(&self, kind: ValidationType) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.count(ValidationLevel::Error) > 0
    }

    /// Strict mode: every warning becomes an error.
    pub fn promote_warnings(&mut self) {
        for issue in &mut self.issues {
            if issue.level == ValidationLevel::Warning {
                issue.level = ValidationLevel::Error;
            }
        }
    }

    #[must_use]
    pub fn stats(&self) -> BTreeMap<String, usize> {
        let mut stats = BTreeMap::new();
        stats.insert("total_issues".to_string(), self.issues.len());
        for level in ValidationLevel::ALL {
            stats.insert(format!("{level}_count"), self.count(level));
        }
        for kind in ValidationType::ALL {
            stats.insert(format!("{kind}_issues"), self.count_type(kind));
        }
        stats
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let value = json!({
            "stats": self.stats(),
            "issues": self.issues,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    #[must_use]
    pub fn summary(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();
        writeln!(out, "{rule}\nFIXTURE VALIDATION REPORT\n{rule}").ok();

        writeln!(out, "\nTotal Issues: {}", self.issues.len()).ok();
        writeln!(out, "  Errors: {}", self.count(ValidationLevel::Error)).ok();
        writeln!(out, "  Warnings: {}", self.count(ValidationLevel::Warning)).ok();
        writeln!(out, "  Info: {}", self.count(ValidationLevel::Info)).ok();

        out.push_str("\nBy Type:\n");
        for kind in ValidationType::ALL {
            let count = self.count_type(kind);
            if count > 0 {
                writeln!(out, "  {}: {count}", capitalize(kind.as_str())).ok();
            }
        }

        if !self.issues.is_empty() {
            out.push_str("\nIssues:\n");
            for level in ValidationLevel::ALL {
                self.write_level(&mut out, level);
            }
        }

        let verdict = if self.has_errors() {
            "VALIDATION FAILED - Errors must be fixed"
        } else {
            "VALIDATION PASSED - No critical errors found"
        };
        writeln!(out, "\n{rule}\n{verdict}\n{rule}").ok();
        out
    }

    fn write_level(&self, out: &mut String, level: ValidationLevel) {
        let issues: Vec<&ValidationIssue> =
            self.issues.iter().filter(|i| i.level == level).collect();
        if issues.is_empty() {
            return;
        }
        writeln!(out, "\n{}S:", level.label()).ok();
        for issue in issues.iter().take(ISSUES_PER_LEVEL) {
            writeln!(out, "  - {}: {}", issue.path.display(), issue.message).ok();
        }
        if issues.len() > ISSUES_PER_LEVEL {
            writeln!(out, "  ... and {} more", issues.len() - ISSUES_PER_LEVEL).ok();
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
