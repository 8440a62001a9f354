use std::path::Path;

use walkdir::WalkDir;

use crate::counter::{split_lines, strip_bom};
use crate::fixtures::model::EXPECTED_FILE;
use crate::fixtures::subdirs;

use super::{FixtureValidator, ValidationIssue, ValidationType};

const KIND: ValidationType = ValidationType::Performance;
pub const MAX_FILE_SIZE: u64 = 100 * 1024;
/// Longest line, in characters, before it is reported.
pub const MAX_LINE_LENGTH: usize = 1000;

/// Fixture files small enough to keep test runs fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceValidator;

impl FixtureValidator for PerformanceValidator {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn validate(&self, root: &Path) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for dir in subdirs(root).iter().flat_map(|c| subdirs(c)) {
            let files = WalkDir::new(&dir)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().is_file() && e.file_name() != EXPECTED_FILE);
            for entry in files {
                issues.extend(check_file(entry.path()));
            }
        }
        issues
    }
}

fn check_file(path: &Path) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let size = std::fs::metadata(path).map_or(0, |m| m.len());
    if size > MAX_FILE_SIZE {
        issues.push(
            ValidationIssue::warning(
                KIND,
                path,
                format!(
                    "File size ({size} bytes) exceeds recommended maximum ({MAX_FILE_SIZE} bytes)"
                ),
            )
            .with_detail("size", size),
        );
    }

    // Read errors are reported by the correctness validator.
    let Ok(bytes) = std::fs::read(path) else {
        return issues;
    };
    let content = String::from_utf8_lossy(&bytes);
    let long_line = split_lines(strip_bom(&content))
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.chars().count()))
        .find(|&(_, length)| length > MAX_LINE_LENGTH);
    if let Some((number, length)) = long_line {
        issues.push(
            ValidationIssue::info(
                KIND,
                path,
                format!("Line {number} exceeds {MAX_LINE_LENGTH} characters"),
            )
            .with_detail("line_number", number)
            .with_detail("length", length),
        );
    }
    issues
}
