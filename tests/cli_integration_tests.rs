//! Integration tests for global flags, help and exit codes.

mod common;

use common::TestProject;
use predicates::prelude::*;

#[test]
fn help_mentions_exit_codes_and_subcommands() {
    nxlc!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"))
        .stdout(predicate::str::contains("languages"))
        .stdout(predicate::str::contains("fixtures"));
}

#[test]
fn version_flag() {
    nxlc!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("nxlc "));
}

#[test]
fn unknown_flag_is_usage_error() {
    nxlc!().arg("--definitely-not-a-flag").assert().code(2);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let project = TestProject::new();
    project.create_rust_file("main.rs", 0, 0, 1);

    nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "-vv", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn log_env_overrides_verbosity() {
    let project = TestProject::new();
    project.create_rust_file("main.rs", 0, 0, 1);

    nxlc!()
        .current_dir(project.path())
        .env("NXLC_LOG", "info")
        .args(["--no-config", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn quiet_keeps_stderr_clean() {
    let project = TestProject::new();
    project.create_rust_file("main.rs", 0, 0, 1);

    nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn explicit_config_path() {
    let project = TestProject::new();
    project.create_rust_file("main.rs", 1, 0, 1);
    project.create_file("conf/nxlc.toml", "[output]\nformat = \"json\"\n");

    nxlc!()
        .current_dir(project.path())
        .args(["--config", "conf/nxlc.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\""));
}

#[test]
fn missing_explicit_config_is_config_error() {
    let project = TestProject::new();

    nxlc!()
        .current_dir(project.path())
        .args(["--config", "missing.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn invalid_workers_env_is_config_error() {
    let project = TestProject::new();

    nxlc!()
        .current_dir(project.path())
        .env("NXLC_WORKERS", "many")
        .args(["--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NXLC_WORKERS"));
}

#[test]
fn no_config_ignores_local_file() {
    let project = TestProject::new();
    project.create_rust_file("main.rs", 0, 0, 1);
    project.create_config("[output]\nformat = \"json\"\n");

    nxlc!()
        .current_dir(project.path())
        .args(["--no-config", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language"));
}

#[test]
fn global_flags_before_languages() {
    nxlc!()
        .args(["--no-config", "-v", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"));
}

#[test]
fn global_flags_before_fixtures() {
    let project = TestProject::new();

    nxlc!()
        .current_dir(project.path())
        .args(["-q", "--no-config", "fixtures", "--dir", "fx", "generate", "--language", "Go"])
        .assert()
        .success();

    nxlc!()
        .current_dir(project.path())
        .args(["-q", "--color", "never", "--no-config", "fixtures", "--dir", "fx", "validate"])
        .assert()
        .success();
}

#[test]
fn count_options_before_subcommand_are_rejected() {
    nxlc!()
        .args(["--no-config", "--by-file", "languages"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be combined with the 'languages' subcommand"));
}
