//! Integration tests for the default count command.

mod common;

use common::{TestProject, mixed_project, stdout_json};
use predicates::prelude::*;

#[test]
fn count_text_table() {
    let project = mixed_project();

    nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language"))
        .stdout(predicate::str::contains("Rust"))
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn count_json_summary() {
    let project = mixed_project();

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["files"], 3);
    assert_eq!(json["summary"]["total"], 16);
    assert_eq!(json["summary"]["code"], 10);
    assert_eq!(json["summary"]["comment"], 4);
    assert_eq!(json["summary"]["blank"], 2);
    assert_eq!(json["languages"][0]["language"], "Rust");
    assert!(json.get("files").is_none());
}

#[test]
fn count_by_file_lists_relative_paths() {
    let project = mixed_project();

    let output = nxlc!()
        .args(["--no-config", "--format", "json", "--by-file"])
        .arg(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let paths: Vec<&str> = json["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["scripts/build.py", "src/lib.rs", "src/main.rs"]);
}

#[test]
fn count_sort_by_name() {
    let project = mixed_project();

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json", "--sort", "name"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["languages"][0]["language"], "Python");
    assert_eq!(json["languages"][1]["language"], "Rust");
}

#[test]
fn count_exclude_pattern() {
    let project = mixed_project();

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json", "-x", "scripts"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["files"], 2);
    assert_eq!(json["summary"]["languages"], 1);
}

#[test]
fn count_respects_gitignore_unless_no_git() {
    let project = mixed_project();
    project.create_file(".gitignore", "scripts/\n");

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["summary"]["files"], 2);

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json", "--no-git"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["summary"]["files"], 3);
}

#[test]
fn count_hidden_files_only_with_flag() {
    let project = TestProject::new();
    project.create_rust_file("src/main.rs", 0, 0, 1);
    project.create_rust_file(".hidden/extra.rs", 0, 0, 1);

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["summary"]["files"], 1);

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json", "--hidden"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["summary"]["files"], 2);
}

#[test]
fn count_single_file() {
    let project = mixed_project();

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json", "src/main.rs"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["total"], 8);
}

#[test]
fn count_empty_directory() {
    let project = TestProject::new();
    project.create_dir("empty");

    nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "empty"])
        .assert()
        .success()
        .stdout("No source files found.\n");
}

#[test]
fn count_missing_path_exits_with_config_error() {
    let project = TestProject::new();

    nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn count_writes_output_file() {
    let project = mixed_project();

    nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json", "-o", "out/stats.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: serde_json::Value = serde_json::from_str(&project.read("out/stats.json")).unwrap();
    assert_eq!(json["summary"]["files"], 3);
}

#[test]
fn count_uses_local_config() {
    let project = mixed_project();
    project.create_config("[output]\nformat = \"json\"\n\n[scanner]\nexclude = [\"src/lib.rs\"]\n");

    let output = nxlc!().current_dir(project.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["summary"]["files"], 2);
}

#[test]
fn count_custom_language_from_config() {
    let project = TestProject::new();
    project.create_config(
        "[languages.Widget]\nextensions = [\"wdg\"]\nsingle_line_comments = [\"%%\"]\n",
    );
    project.create_file("a.wdg", "%% note\nshow 1\n");

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["languages"][0]["language"], "Widget");
    assert_eq!(json["summary"]["comment"], 1);
    assert_eq!(json["summary"]["code"], 1);
}

#[test]
fn count_invalid_config_exits_with_config_error() {
    let project = mixed_project();
    project.create_config("[fixtures]\ntolerance = 3.0\n");

    nxlc!()
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn count_skips_binary_files() {
    let project = TestProject::new();
    project.create_rust_file("main.rs", 0, 0, 2);
    std::fs::write(project.path().join("blob.rs"), b"fn x() {}\n\0\0\0").unwrap();

    let output = nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--format", "json"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["skipped"]["binary"], 1);
}
