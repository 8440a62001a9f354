//! Config discovery: current directory, user config, fallback to defaults.

use std::path::PathBuf;

use crate::config::{Config, ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.nxlc.toml", "[scanner]\nhidden = true\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.config.scanner.hidden);
    assert_eq!(result.source, Some(PathBuf::from("/my/project/.nxlc.toml")));
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/nxlc/config.toml",
        "[output]\nsort = \"name\"\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.output.sort.as_deref(), Some("name"));
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.nxlc.toml", "[output]\nsort = \"files\"\n")
        .with_file(
            "/home/user/.config/nxlc/config.toml",
            "[output]\nsort = \"name\"\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.output.sort.as_deref(), Some("files"));
}

#[test]
fn missing_user_config_dir_is_fine() {
    let fs = MockFileSystem::new().with_config_dir(None);
    assert!(FileConfigLoader::with_fs(fs).load().is_ok());
}

#[test]
fn explicit_path_must_exist() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(&PathBuf::from("/nowhere/nxlc.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("/nowhere/nxlc.toml"));
}
