use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;

use super::{Category, CommentSyntax, Language, builtin, detect};
use crate::config::CustomLanguageConfig;

#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
    filename_map: HashMap<String, usize>,
    name_map: HashMap<String, usize>,
    interpreter_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
            filename_map: HashMap::new(),
            name_map: HashMap::new(),
            interpreter_map: HashMap::new(),
        }
    }

    /// Adds a language. A language with the same name is replaced in place, and
    /// later registrations take over conflicting extensions, filenames and interpreters.
    pub fn register(&mut self, language: Language) {
        let key = language.name.to_lowercase();
        let idx = if let Some(&existing) = self.name_map.get(&key) {
            self.extension_map.retain(|_, i| *i != existing);
            self.filename_map.retain(|_, i| *i != existing);
            self.interpreter_map.retain(|_, i| *i != existing);
            self.languages[existing] = language;
            existing
        } else {
            self.languages.push(language);
            self.languages.len() - 1
        };

        let language = &self.languages[idx];
        for ext in &language.extensions {
            self.extension_map.insert(ext.to_lowercase(), idx);
        }
        for name in &language.filenames {
            self.filename_map.insert(name.clone(), idx);
        }
        for interpreter in &language.interpreters {
            self.interpreter_map.insert(interpreter.clone(), idx);
        }
        self.name_map.insert(key, idx);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        self.extension_map
            .get(&ext)
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_filename(&self, name: &str) -> Option<&Language> {
        self.filename_map
            .get(name)
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Language> {
        self.name_map
            .get(&name.to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_interpreter(&self, interpreter: &str) -> Option<&Language> {
        self.interpreter_map
            .get(interpreter)
            .map(|&idx| &self.languages[idx])
    }

    /// Resolves a file's language by exact file name, then extension, then the
    /// shebang in `first_line` (if given).
    #[must_use]
    pub fn detect(&self, path: &Path, first_line: Option<&str>) -> Option<&Language> {
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(language) = self.get_by_filename(name)
        {
            return Some(language);
        }

        if let Some(ext) = path.extension().and_then(|e| e.to_str())
            && let Some(language) = self.get_by_extension(ext)
        {
            return Some(language);
        }

        first_line
            .and_then(detect::interpreter_from_shebang)
            .and_then(|interpreter| self.get_by_interpreter(&interpreter))
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Language> {
        let mut languages: Vec<&Language> = self
            .languages
            .iter()
            .filter(|l| l.category == category)
            .collect();
        languages.sort_by_key(|l| l.name.to_lowercase());
        languages
    }

    /// Language names per category, categories in declaration order, names sorted.
    #[must_use]
    pub fn list_by_category(&self) -> IndexMap<Category, Vec<String>> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let names: Vec<String> = self
                    .by_category(category)
                    .into_iter()
                    .map(|l| l.name.clone())
                    .collect();
                (!names.is_empty()).then_some((category, names))
            })
            .collect()
    }

    #[must_use]
    pub fn with_custom_languages(custom: &HashMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();

        let mut names: Vec<&String> = custom.keys().collect();
        names.sort();

        for name in names {
            let config = &custom[name];
            let syntax = CommentSyntax::with_multi_line(
                config.single_line_comments.iter().map(String::as_str).collect(),
                config
                    .multi_line_comments
                    .iter()
                    .map(|(start, end)| (start.as_str(), end.as_str()).into())
                    .collect(),
            );
            let language = Language::new(
                name,
                config.category.unwrap_or(Category::Domain),
                config.extensions.iter().map(String::as_str).collect(),
                syntax,
            )
            .with_filenames(config.filenames.iter().map(String::as_str).collect());
            registry.register(language);
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for language in builtin::languages() {
            registry.register(language);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
