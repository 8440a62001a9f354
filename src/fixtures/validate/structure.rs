use std::path::Path;

use serde_json::Value;

use crate::fixtures::model::FixtureKind;
use crate::fixtures::subdirs;

use super::{FixtureValidator, ValidationIssue, ValidationType, entry_filename, read_expected};

/// Categories every fixtures tree is expected to have.
pub const REQUIRED_CATEGORIES: [&str; 4] = ["common", "web", "systems", "scripting"];

const KIND: ValidationType = ValidationType::Structure;

/// Directory layout, `expected.json` presence and fixture file presence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureValidator;

impl FixtureValidator for StructureValidator {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn validate(&self, root: &Path) -> Vec<ValidationIssue> {
        if !root.is_dir() {
            return vec![ValidationIssue::error(
                KIND,
                root,
                "Fixtures directory does not exist",
            )];
        }

        let mut issues: Vec<ValidationIssue> = REQUIRED_CATEGORIES
            .iter()
            .filter(|category| !root.join(category).is_dir())
            .map(|category| {
                ValidationIssue::warning(
                    KIND,
                    &root.join(category),
                    format!("Required category '{category}' is missing"),
                )
            })
            .collect();

        for category in subdirs(root) {
            let languages = subdirs(&category);
            if languages.is_empty() {
                issues.push(ValidationIssue::warning(
                    KIND,
                    &category,
                    "Category has no language directories",
                ));
            }
            for language in languages {
                issues.extend(validate_language_dir(&language));
            }
        }
        issues
    }
}

fn validate_language_dir(dir: &Path) -> Vec<ValidationIssue> {
    let expected: Value = match read_expected(dir) {
        None => return vec![ValidationIssue::error(KIND, dir, "Missing expected.json file")],
        Some(Err(e)) => {
            return vec![ValidationIssue::error(KIND, dir, format!("Invalid JSON: {e}"))];
        }
        Some(Ok(value)) => value,
    };

    let mut issues = Vec::new();
    for kind in FixtureKind::ALL {
        let Some(entry) = expected.get(kind.as_str()) else {
            issues.push(ValidationIssue::warning(
                KIND,
                dir,
                format!("Missing fixture type '{kind}' in expected.json"),
            ));
            continue;
        };
        let file = dir.join(entry_filename(entry, kind));
        if !file.exists() {
            issues.push(ValidationIssue::error(KIND, &file, "Fixture file does not exist"));
        }
    }
    issues
}
