use std::path::Path;

use super::*;

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(vec!["rs".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(!filter.should_include(Path::new("src/main.py")));
}

#[test]
fn extension_match_ignores_case_and_dot() {
    let filter = GlobFilter::new(vec![".RS".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("MAIN.Rs")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("Makefile")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        vec![],
        &["**/target/**".to_string(), "**/generated/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(!filter.should_include(Path::new("target/debug/main.rs")));
    assert!(!filter.should_include(Path::new("src/generated/code.rs")));
}

#[test]
fn bare_directory_name_excludes_its_contents() {
    let filter = GlobFilter::new(vec![], &["vendor".to_string()]).unwrap();

    assert!(!filter.should_include(Path::new("vendor/lib/a.c")));
    assert!(filter.should_include(Path::new("src/vendored.c")));
}

#[test]
fn filter_exclude_specific_files() {
    let filter = GlobFilter::new(vec![], &["*.min.js".to_string()]).unwrap();

    assert!(filter.should_include(Path::new("web/app.js")));
    assert!(!filter.should_include(Path::new("web/app.min.js")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(NxlcError::InvalidPattern { pattern, .. }) if pattern == "[invalid"
    ));
}
