//! Semantic checks that run after a config is parsed and overridden.

use crate::analysis::SortKey;
use crate::config::Config;
use crate::error::{NxlcError, Result};
use crate::output::OutputFormat;

/// # Errors
/// Returns an error on out-of-range tolerances, zero workers, invalid globs,
/// unknown output settings or custom languages that match no files.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_scanner(config)?;
    validate_output(config)?;
    validate_languages(config)?;
    validate_fixtures(config)?;
    Ok(())
}

fn validate_scanner(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| NxlcError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    if let Some(format) = &config.output.format {
        format.parse::<OutputFormat>()?;
    }
    if let Some(sort) = &config.output.sort {
        sort.parse::<SortKey>()?;
    }
    Ok(())
}

fn validate_languages(config: &Config) -> Result<()> {
    for (name, language) in &config.languages {
        if name.trim().is_empty() {
            return Err(NxlcError::Config(
                "languages: language names must not be empty".to_string(),
            ));
        }
        if language.extensions.is_empty() && language.filenames.is_empty() {
            return Err(NxlcError::Config(format!(
                "languages.{name} needs at least one extension or filename"
            )));
        }
    }
    Ok(())
}

fn validate_fixtures(config: &Config) -> Result<()> {
    let fixtures = &config.fixtures;
    if !(0.0..=1.0).contains(&fixtures.tolerance) {
        return Err(NxlcError::Config(format!(
            "fixtures.tolerance must be between 0.0 and 1.0, got {}",
            fixtures.tolerance
        )));
    }
    for (language, tolerance) in &fixtures.language_tolerance {
        if !(0.0..=1.0).contains(tolerance) {
            return Err(NxlcError::Config(format!(
                "fixtures.language_tolerance.{language} must be between 0.0 and 1.0, got {tolerance}"
            )));
        }
    }
    if fixtures.workers == 0 {
        return Err(NxlcError::Config(
            "fixtures.workers must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
