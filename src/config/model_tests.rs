use std::collections::HashMap;

use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.fixtures.dir, PathBuf::from(DEFAULT_FIXTURE_DIR));
}

#[test]
fn parses_all_sections() {
    let config: Config = toml::from_str(
        r##"
[scanner]
gitignore = false
hidden = true
exclude = ["target/**"]

[output]
format = "json"
sort = "name"

[languages.Jsonnet]
extensions = ["jsonnet", "libsonnet"]
single_line_comments = ["//", "#"]
multi_line_comments = [["/*", "*/"]]
category = "config"

[fixtures]
dir = "fx"
workers = 2
tolerance = 0.05
language_tolerance = { Python = 0.1 }
"##,
    )
    .unwrap();

    assert!(!config.scanner.gitignore);
    assert!(config.scanner.hidden);
    assert_eq!(config.scanner.exclude, ["target/**"]);
    assert_eq!(config.output.format.as_deref(), Some("json"));
    assert_eq!(config.output.sort.as_deref(), Some("name"));

    let jsonnet = &config.languages["Jsonnet"];
    assert_eq!(jsonnet.extensions, ["jsonnet", "libsonnet"]);
    assert_eq!(
        jsonnet.multi_line_comments,
        [("/*".to_string(), "*/".to_string())]
    );
    assert_eq!(jsonnet.category, Some(Category::Config));

    assert_eq!(config.fixtures.dir, PathBuf::from("fx"));
    assert_eq!(config.fixtures.workers, 2);
    assert!((config.fixtures.language_tolerance["Python"] - 0.1).abs() < f64::EPSILON);
}

#[test]
fn unknown_category_is_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str(
        r#"
[languages.Foo]
extensions = ["foo"]
category = "exotic"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn env_overrides_fixture_dir_and_workers() {
    let mut config = Config::default();
    config
        .apply_env_overrides(env(&[(ENV_FIXTURE_DIR, "/tmp/fx"), (ENV_WORKERS, " 3 ")]))
        .unwrap();
    assert_eq!(config.fixtures.dir, PathBuf::from("/tmp/fx"));
    assert_eq!(config.fixtures.workers, 3);
}

#[test]
fn empty_fixture_dir_env_is_ignored() {
    let mut config = Config::default();
    config
        .apply_env_overrides(env(&[(ENV_FIXTURE_DIR, "")]))
        .unwrap();
    assert_eq!(config.fixtures.dir, PathBuf::from(DEFAULT_FIXTURE_DIR));
}

#[test]
fn invalid_workers_env_is_an_error() {
    let mut config = Config::default();
    let err = config
        .apply_env_overrides(env(&[(ENV_WORKERS, "many")]))
        .unwrap_err();
    assert!(err.to_string().contains(ENV_WORKERS));
}
