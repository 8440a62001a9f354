use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::NxlcError;
use crate::language::Category;

use super::mock_fs::MockFileSystem;

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.nxlc.toml", "[scanner\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, NxlcError::TomlParse(_)));
}

#[test]
fn type_mismatch_is_parse_error() {
    let fs =
        MockFileSystem::new().with_file("/project/.nxlc.toml", "[fixtures]\nworkers = \"x\"\n");
    assert!(FileConfigLoader::with_fs(fs).load().is_err());
}

#[test]
fn loaded_config_is_validated() {
    let fs = MockFileSystem::new().with_file("/cfg.toml", "[fixtures]\ntolerance = 2.0\n");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg.toml"))
        .unwrap_err();
    assert!(matches!(err, NxlcError::Config(_)));
}

#[test]
fn custom_languages_are_loaded() {
    let content = r#"
[languages.Jsonnet]
extensions = ["jsonnet"]
single_line_comments = ["//"]
category = "config"
"#;
    let fs = MockFileSystem::new().with_file("/cfg.toml", content);
    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg.toml"))
        .unwrap();

    let jsonnet = &result.config.languages["Jsonnet"];
    assert_eq!(jsonnet.extensions, ["jsonnet"]);
    assert_eq!(jsonnet.category, Some(Category::Config));
}
