use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::fixtures::FixtureGenerator;
use crate::language::{Category, LanguageRegistry};

fn generated(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let registry = LanguageRegistry::default();
    let generator = FixtureGenerator::new(dir.path(), &registry);
    for name in names {
        generator.generate_named(name, false).unwrap();
    }
    dir
}

fn messages(issues: &[ValidationIssue]) -> Vec<&str> {
    issues.iter().map(|i| i.message.as_str()).collect()
}

fn rewrite_expected(dir: &Path, edit: impl FnOnce(&mut serde_json::Value)) {
    let path = dir.join(EXPECTED_FILE);
    let mut value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    edit(&mut value);
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

#[test]
fn structure_reports_missing_root() {
    let dir = TempDir::new().unwrap();
    let issues = StructureValidator.validate(&dir.path().join("none"));
    assert_eq!(messages(&issues), vec!["Fixtures directory does not exist"]);
    assert_eq!(issues[0].level, ValidationLevel::Error);
}

#[test]
fn structure_warns_about_required_categories() {
    let dir = generated(&["Rust"]);
    let issues = StructureValidator.validate(dir.path());
    let missing: Vec<&str> = messages(&issues)
        .into_iter()
        .filter(|m| m.starts_with("Required category"))
        .collect();
    assert_eq!(missing.len(), 3);
    assert!(issues.iter().all(|i| i.level == ValidationLevel::Warning));
}

#[test]
fn structure_flags_empty_category_and_missing_expected() {
    let dir = generated(&["Rust"]);
    fs::create_dir_all(dir.path().join("web")).unwrap();
    fs::create_dir_all(dir.path().join("systems").join("zig")).unwrap();

    let issues = StructureValidator.validate(dir.path());
    let all = messages(&issues);
    assert!(all.contains(&"Category has no language directories"));
    assert!(all.contains(&"Missing expected.json file"));
}

#[test]
fn structure_flags_missing_kind_and_file() {
    let dir = generated(&["Rust"]);
    let lang_dir = dir.path().join("common").join("rust");
    rewrite_expected(&lang_dir, |v| {
        v.as_object_mut().unwrap().remove("complex");
    });
    fs::remove_file(lang_dir.join("simple.rs")).unwrap();

    let issues = StructureValidator.validate(dir.path());
    let all = messages(&issues);
    assert!(all.contains(&"Missing fixture type 'complex' in expected.json"));
    let missing = issues
        .iter()
        .find(|i| i.message == "Fixture file does not exist")
        .unwrap();
    assert_eq!(missing.level, ValidationLevel::Error);
    assert!(missing.path.ends_with("simple.rs"));
}

#[test]
fn structure_flags_invalid_json() {
    let dir = generated(&["Rust"]);
    fs::write(dir.path().join("common").join("rust").join(EXPECTED_FILE), "{").unwrap();
    let issues = StructureValidator.validate(dir.path());
    assert!(issues.iter().any(|i| i.message.starts_with("Invalid JSON")));
}

#[test]
fn consistency_flags_duplicates() {
    let dir = generated(&["Rust"]);
    let copy = dir.path().join("systems").join("rust-copy");
    fs::create_dir_all(&copy).unwrap();
    fs::copy(
        dir.path().join("common").join("rust").join(EXPECTED_FILE),
        copy.join(EXPECTED_FILE),
    )
    .unwrap();

    let issues = ConsistencyValidator.validate(dir.path());
    assert_eq!(messages(&issues), vec!["Duplicate language 'Rust' found"]);
    assert!(issues[0].details.contains_key("first_occurrence"));
}

#[test]
fn consistency_flags_missing_and_bad_fields() {
    let dir = generated(&["Rust"]);
    let lang_dir = dir.path().join("common").join("rust");
    rewrite_expected(&lang_dir, |v| {
        let object = v.as_object_mut().unwrap();
        object.remove("category");
        object["simple"].as_object_mut().unwrap().remove("blank");
        object["complex"]["code"] = serde_json::json!(-1);
        object["edge_cases"]["total"] = serde_json::json!("many");
    });

    let issues = ConsistencyValidator.validate(dir.path());
    let all = messages(&issues);
    assert!(all.contains(&"Missing required field 'category'"));
    assert!(all.contains(&"Missing count field 'blank' in simple"));
    assert!(all.contains(&"Count field 'code' in complex must be a non-negative integer"));
    assert!(all.contains(&"Count field 'total' in edge_cases must be a non-negative integer"));
}

#[test]
fn completeness_reports_thin_coverage() {
    let dir = generated(&["Rust", "Go"]);
    let issues = CompletenessValidator.validate(dir.path());
    assert_eq!(
        messages(&issues),
        vec![
            "Category has only 2 languages (minimum recommended: 3)",
            "Only 2 languages available for testing",
        ]
    );
    assert_eq!(issues[0].level, ValidationLevel::Info);
    assert_eq!(issues[1].level, ValidationLevel::Warning);
}

#[test]
fn generated_tree_passes_correctness_and_performance() {
    let dir = TempDir::new().unwrap();
    let registry = LanguageRegistry::default();
    FixtureGenerator::new(dir.path(), &registry)
        .generate_category(Category::Common, false)
        .unwrap();

    assert!(CorrectnessValidator.validate(dir.path()).is_empty());
    assert!(PerformanceValidator.validate(dir.path()).is_empty());
}

#[test]
fn correctness_flags_wrong_totals() {
    let dir = generated(&["Rust"]);
    let lang_dir = dir.path().join("common").join("rust");
    rewrite_expected(&lang_dir, |v| {
        v["simple"]["total"] = serde_json::json!(1);
    });

    let issues = CorrectnessValidator.validate(dir.path());
    let mismatch = issues
        .iter()
        .find(|i| i.message.starts_with("Line count mismatch"))
        .unwrap();
    assert_eq!(mismatch.level, ValidationLevel::Error);
    assert!(issues.iter().any(|i| i.message.starts_with("Count sum issue")));
    assert!(issues.iter().any(|i| i.message.starts_with("Counts do not add up")));
}

#[test]
fn correctness_counts_cr_terminated_lines() {
    let dir = generated(&["Rust"]);
    let lang_dir = dir.path().join("common").join("rust");
    fs::write(lang_dir.join("simple.rs"), "a\rb\r\nc\n").unwrap();
    rewrite_expected(&lang_dir, |v| {
        v["simple"] = serde_json::json!({
            "filename": "simple.rs", "total": 3, "code": 3, "comments": 0, "blank": 0
        });
    });
    assert!(CorrectnessValidator.validate(dir.path()).is_empty());
}

#[test]
fn performance_flags_large_files_and_long_lines() {
    let dir = generated(&["Rust"]);
    let lang_dir = dir.path().join("common").join("rust");
    let long = "x".repeat(performance::MAX_LINE_LENGTH + 1);
    fs::write(lang_dir.join("simple.rs"), format!("ok\n{long}\n")).unwrap();
    let big = "y\n".repeat(usize::try_from(performance::MAX_FILE_SIZE).unwrap());
    fs::write(lang_dir.join("complex.rs"), big).unwrap();

    let issues = PerformanceValidator.validate(dir.path());
    assert!(issues.iter().any(|i| i.level == ValidationLevel::Warning
        && i.message.starts_with("File size")));
    let long_line = issues
        .iter()
        .find(|i| i.message == "Line 2 exceeds 1000 characters")
        .unwrap();
    assert_eq!(long_line.level, ValidationLevel::Info);
}

#[test]
fn suite_runs_every_validator() {
    let suite = ValidatorSuite::default();
    assert_eq!(
        suite.names(),
        vec!["structure", "consistency", "completeness", "correctness", "performance"]
    );
    let dir = TempDir::new().unwrap();
    let report = suite.validate(&dir.path().join("none"));
    assert!(report.has_errors());
}

#[test]
fn validate_specific_matches_names_loosely() {
    let dir = generated(&["Rust"]);
    let suite = ValidatorSuite::default();
    let names = vec![
        "CompletenessValidator".to_string(),
        "bogus".to_string(),
    ];
    let report = suite.validate_specific(dir.path(), &names);
    assert!(!report.issues().is_empty());
    assert!(
        report
            .issues()
            .iter()
            .all(|i| i.kind == ValidationType::Completeness)
    );
}
