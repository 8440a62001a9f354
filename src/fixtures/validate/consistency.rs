use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::fixtures::model::{EXPECTED_FILE, FixtureKind};
use crate::fixtures::subdirs;

use super::{FixtureValidator, ValidationIssue, ValidationType, read_expected};

const KIND: ValidationType = ValidationType::Consistency;
const REQUIRED_FIELDS: [&str; 2] = ["language", "category"];
const COUNT_FIELDS: [&str; 4] = ["total", "code", "comments", "blank"];

/// Unique language names and well-formed `expected.json` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyValidator;

impl FixtureValidator for ConsistencyValidator {
    fn name(&self) -> &'static str {
        "consistency"
    }

    fn validate(&self, root: &Path) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut documents: Vec<(PathBuf, Value)> = Vec::new();

        for dir in subdirs(root).iter().flat_map(|c| subdirs(c)) {
            // Unreadable files are reported by the structure validator.
            let Some(Ok(data)) = read_expected(&dir) else {
                continue;
            };
            let language = data
                .get("language")
                .and_then(Value::as_str)
                .map_or_else(|| dir_name(&dir), String::from);

            if let Some(first) = seen.get(&language) {
                issues.push(
                    ValidationIssue::error(
                        KIND,
                        &dir,
                        format!("Duplicate language '{language}' found"),
                    )
                    .with_detail("first_occurrence", first.display().to_string())
                    .with_detail("duplicate", dir.display().to_string()),
                );
            } else {
                seen.insert(language, dir.clone());
                documents.push((dir, data));
            }
        }

        for (dir, data) in &documents {
            issues.extend(check_fields(&dir.join(EXPECTED_FILE), data));
        }
        issues
    }
}

fn check_fields(path: &Path, data: &Value) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = REQUIRED_FIELDS
        .iter()
        .filter(|field| data.get(field).is_none())
        .map(|field| {
            ValidationIssue::error(KIND, path, format!("Missing required field '{field}'"))
        })
        .collect();

    for kind in FixtureKind::ALL {
        let Some(entry) = data.get(kind.as_str()) else {
            continue;
        };
        for field in COUNT_FIELDS {
            match entry.get(field) {
                None => issues.push(ValidationIssue::error(
                    KIND,
                    path,
                    format!("Missing count field '{field}' in {kind}"),
                )),
                Some(value) if value.as_u64().is_none() => issues.push(ValidationIssue::error(
                    KIND,
                    path,
                    format!("Count field '{field}' in {kind} must be a non-negative integer"),
                )),
                Some(_) => {}
            }
        }
    }
    issues
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
