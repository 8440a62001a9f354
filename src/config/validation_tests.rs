use super::*;
use crate::config::CustomLanguageConfig;

#[test]
fn tolerance_out_of_range() {
    let mut config = Config::default();
    config.fixtures.tolerance = 1.5;
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("fixtures.tolerance"));
}

#[test]
fn language_tolerance_out_of_range() {
    let mut config = Config::default();
    config
        .fixtures
        .language_tolerance
        .insert("Python".to_string(), -0.1);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("language_tolerance.Python"));
}

#[test]
fn zero_workers() {
    let mut config = Config::default();
    config.fixtures.workers = 0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn invalid_exclude_glob() {
    let mut config = Config::default();
    config.scanner.exclude.push("src/[".to_string());
    assert!(matches!(
        validate_config(&config),
        Err(NxlcError::InvalidPattern { .. })
    ));
}

#[test]
fn unknown_output_settings() {
    let mut config = Config::default();
    config.output.format = Some("yaml".to_string());
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.output.sort = Some("size".to_string());
    assert!(validate_config(&config).is_err());
}

#[test]
fn custom_language_needs_a_match_rule() {
    let mut config = Config::default();
    config
        .languages
        .insert("Empty".to_string(), CustomLanguageConfig::default());
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("languages.Empty"));

    config.languages.get_mut("Empty").unwrap().filenames = vec!["Emptyfile".to_string()];
    assert!(validate_config(&config).is_ok());
}
