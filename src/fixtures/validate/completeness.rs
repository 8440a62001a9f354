use std::path::Path;

use crate::fixtures::model::EXPECTED_FILE;
use crate::fixtures::subdirs;

use super::{FixtureValidator, ValidationIssue, ValidationType};

const KIND: ValidationType = ValidationType::Completeness;
pub const MIN_LANGUAGES_PER_CATEGORY: usize = 3;
pub const MIN_LANGUAGES_TOTAL: usize = 10;

/// Coverage: enough languages per category and overall.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletenessValidator;

impl FixtureValidator for CompletenessValidator {
    fn name(&self) -> &'static str {
        "completeness"
    }

    fn validate(&self, root: &Path) -> Vec<ValidationIssue> {
        if !root.is_dir() {
            return Vec::new();
        }

        let mut issues = Vec::new();
        let mut total = 0;
        for category in subdirs(root) {
            let count = subdirs(&category)
                .iter()
                .filter(|dir| dir.join(EXPECTED_FILE).is_file())
                .count();
            total += count;
            if count < MIN_LANGUAGES_PER_CATEGORY {
                issues.push(ValidationIssue::info(
                    KIND,
                    &category,
                    format!(
                        "Category has only {count} languages (minimum recommended: {MIN_LANGUAGES_PER_CATEGORY})"
                    ),
                ));
            }
        }

        if total < MIN_LANGUAGES_TOTAL {
            issues.push(ValidationIssue::warning(
                KIND,
                root,
                format!("Only {total} languages available for testing"),
            ));
        }
        issues
    }
}
