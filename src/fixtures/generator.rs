use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{NxlcError, Result};
use crate::language::{Category, Language, LanguageRegistry};

use super::model::{EXPECTED_FILE, ExpectedEntry, ExpectedFile, FixtureKind};
use super::template::{FixtureTemplate, templates};

/// Writes fixture files and their `expected.json` under
/// `<root>/<category>/<language>/`.
pub struct FixtureGenerator<'a> {
    root: PathBuf,
    registry: &'a LanguageRegistry,
    templates: Vec<Box<dyn FixtureTemplate>>,
}

impl<'a> FixtureGenerator<'a> {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, registry: &'a LanguageRegistry) -> Self {
        Self {
            root: root.into(),
            registry,
            templates: templates(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn language_dir(&self, language: &Language) -> PathBuf {
        self.root
            .join(language.category.as_str())
            .join(language.dir_name())
    }

    /// First extension of `language` that detects back to it, with the dot.
    ///
    /// Extensions shared with another language would make the fixture count
    /// under the wrong syntax, so they are skipped.
    #[must_use]
    pub fn fixture_extension(&self, language: &Language) -> Option<String> {
        language
            .extensions
            .iter()
            .find(|ext| {
                self.registry
                    .get_by_extension(ext)
                    .is_some_and(|found| found.name == language.name)
            })
            .map(|ext| format!(".{ext}"))
    }

    /// Generates every fixture kind for `language`.
    ///
    /// Returns `false` without touching anything when fixtures already exist
    /// and `force` is not set.
    ///
    /// # Errors
    /// Returns an error if the language has no usable extension or a file
    /// cannot be written.
    pub fn generate_language(&self, language: &Language, force: bool) -> Result<bool> {
        let ext = self.fixture_extension(language).ok_or_else(|| {
            NxlcError::Config(format!(
                "Language {} has no file extension to name fixtures with",
                language.name
            ))
        })?;

        let dir = self.language_dir(language);
        let expected_path = dir.join(EXPECTED_FILE);
        let exists = expected_path.exists()
            || FixtureKind::ALL
                .iter()
                .any(|kind| dir.join(kind.file_name(&ext)).exists());
        if exists && !force {
            warn!(
                language = %language.name,
                dir = %dir.display(),
                "Fixtures already exist, use --force to overwrite"
            );
            return Ok(false);
        }

        fs::create_dir_all(&dir).map_err(|source| NxlcError::FileWrite {
            path: dir.clone(),
            source,
        })?;

        let mut expected = ExpectedFile::new(
            &language.name,
            language.category.as_str(),
            language
                .extensions
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect(),
        );
        for template in &self.templates {
            let fixture = template.generate(language);
            let filename = fixture.kind.file_name(&ext);
            let path = dir.join(&filename);
            fs::write(&path, fixture.render())
                .map_err(|source| NxlcError::FileWrite { path, source })?;
            expected.set_entry(
                fixture.kind,
                ExpectedEntry {
                    filename,
                    counts: fixture.counts(),
                },
            );
        }
        expected.write(&expected_path)?;

        info!(language = %language.name, dir = %dir.display(), "Generated fixtures");
        Ok(true)
    }

    /// # Errors
    /// Returns [`NxlcError::UnknownLanguage`] if no language has that name.
    pub fn generate_named(&self, name: &str, force: bool) -> Result<bool> {
        let language = self
            .registry
            .get_by_name(name)
            .ok_or_else(|| NxlcError::UnknownLanguage(name.to_string()))?;
        self.generate_language(language, force)
    }

    /// Generates fixtures for every language in `category`. Returns how many
    /// languages were written.
    ///
    /// # Errors
    /// Returns the first write error. Languages without a usable extension
    /// are logged and skipped.
    pub fn generate_category(&self, category: Category, force: bool) -> Result<usize> {
        let mut written = 0;
        for language in self.registry.by_category(category) {
            match self.generate_language(language, force) {
                Ok(true) => written += 1,
                Ok(false) => {}
                Err(NxlcError::Config(message)) => warn!("{message}, skipping"),
                Err(e) => return Err(e),
            }
        }
        Ok(written)
    }

    /// # Errors
    /// Returns the first write error.
    pub fn generate_all(&self, force: bool) -> Result<usize> {
        let mut written = 0;
        for category in Category::ALL {
            written += self.generate_category(category, force)?;
        }
        Ok(written)
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
