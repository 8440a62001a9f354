//! Checks a fixtures directory for structural problems, inconsistent or
//! wrong expectations, thin coverage and oversized inputs.

mod completeness;
mod consistency;
mod correctness;
mod performance;
mod report;
mod structure;
mod types;

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use super::model::{EXPECTED_FILE, FixtureKind};

pub use completeness::CompletenessValidator;
pub use consistency::ConsistencyValidator;
pub use correctness::CorrectnessValidator;
pub use performance::PerformanceValidator;
pub use report::ValidationReport;
pub use structure::StructureValidator;
pub use types::{ValidationIssue, ValidationLevel, ValidationType};

pub trait FixtureValidator: Send + Sync {
    /// Short lowercase name used to select the validator.
    fn name(&self) -> &'static str;

    fn validate(&self, root: &Path) -> Vec<ValidationIssue>;
}

pub struct ValidatorSuite {
    validators: Vec<Box<dyn FixtureValidator>>,
}

impl Default for ValidatorSuite {
    fn default() -> Self {
        Self::new(vec![
            Box::new(StructureValidator),
            Box::new(ConsistencyValidator),
            Box::new(CompletenessValidator),
            Box::new(CorrectnessValidator),
            Box::new(PerformanceValidator),
        ])
    }
}

impl ValidatorSuite {
    #[must_use]
    pub fn new(validators: Vec<Box<dyn FixtureValidator>>) -> Self {
        Self { validators }
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    #[must_use]
    pub fn validate(&self, root: &Path) -> ValidationReport {
        let mut report = ValidationReport::new();
        for validator in &self.validators {
            Self::run(validator.as_ref(), root, &mut report);
        }
        report
    }

    /// Runs only the named validators, in the order given.
    ///
    /// Names match case-insensitively, with or without a `validator` suffix.
    /// Unknown names are logged and ignored.
    #[must_use]
    pub fn validate_specific(&self, root: &Path, names: &[String]) -> ValidationReport {
        let mut report = ValidationReport::new();
        for name in names {
            let wanted = name.to_lowercase();
            let wanted = wanted.strip_suffix("validator").unwrap_or(&wanted);
            match self.validators.iter().find(|v| v.name() == wanted) {
                Some(validator) => Self::run(validator.as_ref(), root, &mut report),
                None => warn!("Unknown validator: {name}"),
            }
        }
        report
    }

    fn run(validator: &dyn FixtureValidator, root: &Path, report: &mut ValidationReport) {
        info!("Running {} validator", validator.name());
        report.extend(validator.validate(root));
    }
}

/// Parsed `expected.json` of a language directory. `None` when the file is
/// absent, `Some(Err)` when it cannot be read or parsed.
fn read_expected(dir: &Path) -> Option<Result<Value, String>> {
    let path = dir.join(EXPECTED_FILE);
    if !path.is_file() {
        return None;
    }
    Some(
        std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string())),
    )
}

/// Fixture file name of an entry, defaulting to `<kind>.txt`.
fn entry_filename(entry: &Value, kind: FixtureKind) -> String {
    entry
        .get("filename")
        .and_then(Value::as_str)
        .map_or_else(|| format!("{kind}.txt"), String::from)
}

/// Integer count field of an entry, 0 when absent or not an integer.
fn count_field(entry: &Value, key: &str) -> i64 {
    entry.get(key).and_then(Value::as_i64).unwrap_or(0)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
