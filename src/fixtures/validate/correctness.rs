use std::path::Path;

use crate::counter::{split_lines, strip_bom};
use crate::fixtures::model::FixtureKind;
use crate::fixtures::subdirs;

use super::{
    FixtureValidator, ValidationIssue, ValidationType, count_field, entry_filename, read_expected,
};

const KIND: ValidationType = ValidationType::Correctness;

/// Expected counts agree with the files they describe.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrectnessValidator;

impl FixtureValidator for CorrectnessValidator {
    fn name(&self) -> &'static str {
        "correctness"
    }

    fn validate(&self, root: &Path) -> Vec<ValidationIssue> {
        subdirs(root)
            .iter()
            .flat_map(|c| subdirs(c))
            .flat_map(|dir| validate_language_dir(&dir))
            .collect()
    }
}

fn validate_language_dir(dir: &Path) -> Vec<ValidationIssue> {
    let Some(Ok(expected)) = read_expected(dir) else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    for kind in FixtureKind::ALL {
        let Some(entry) = expected.get(kind.as_str()) else {
            continue;
        };
        let file = dir.join(entry_filename(entry, kind));
        if !file.is_file() {
            continue;
        }

        let bytes = match std::fs::read(&file) {
            Ok(bytes) => bytes,
            Err(e) => {
                issues.push(ValidationIssue::error(KIND, &file, format!("Cannot read file: {e}")));
                continue;
            }
        };
        let content = String::from_utf8_lossy(&bytes);
        let actual = i64::try_from(split_lines(strip_bom(&content)).count()).unwrap_or(i64::MAX);

        let total = count_field(entry, "total");
        let code = count_field(entry, "code");
        let comments = count_field(entry, "comments");
        let blank = count_field(entry, "blank");

        if actual != total {
            issues.push(
                ValidationIssue::error(
                    KIND,
                    &file,
                    format!("Line count mismatch: file has {actual} lines, expected {total}"),
                )
                .with_detail("actual", actual)
                .with_detail("expected", total),
            );
        }
        if code + blank > total {
            issues.push(ValidationIssue::warning(
                KIND,
                &file,
                format!("Count sum issue: code({code}) + blank({blank}) > total({total})"),
            ));
        }
        if code + comments + blank != total {
            issues.push(ValidationIssue::warning(
                KIND,
                &file,
                format!(
                    "Counts do not add up: code({code}) + comments({comments}) + blank({blank}) != total({total})"
                ),
            ));
        }
        for (name, value) in [("code", code), ("comments", comments), ("blank", blank)] {
            if value < 0 {
                issues.push(ValidationIssue::error(
                    KIND,
                    &file,
                    format!("Negative count for {name}: {value}"),
                ));
            }
        }
    }
    issues
}
