use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{NxlcError, Result};
use crate::language::LanguageRegistry;
use crate::output::ColorMode;

/// Loads `--config`, the default search path, or defaults with `--no-config`.
/// Environment overrides apply in every case.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    let loader = FileConfigLoader::new();
    let loaded = if no_config {
        loader.defaults()?
    } else {
        config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?
    };
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "using config file");
    }
    Ok(loaded.config)
}

/// Built-in languages plus `[languages]` from the config.
#[must_use]
pub fn build_registry(config: &Config) -> LanguageRegistry {
    if config.languages.is_empty() {
        LanguageRegistry::default()
    } else {
        LanguageRegistry::with_custom_languages(&config.languages)
    }
}

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Fixture root: `--dir`, else `[fixtures] dir` (already env-overridden).
#[must_use]
pub fn fixture_root(dir: Option<&Path>, config: &Config) -> PathBuf {
    dir.map_or_else(|| config.fixtures.dir.clone(), Path::to_path_buf)
}

/// Writes `content` to `output_path`, creating parent directories, or prints it.
///
/// # Errors
/// Returns an error if the file or its parent directory cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = output_path else {
        print!("{content}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| NxlcError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| NxlcError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote output");
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
