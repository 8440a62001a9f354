use std::fmt::Write;

use serde::Serialize;

use crate::cli::{Cli, LanguagesArgs};
use crate::language::{Category, Language, LanguageRegistry};
use crate::output::OutputFormat;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{build_registry, load_config, write_output};

#[derive(Serialize)]
struct LanguageEntry<'a> {
    name: &'a str,
    category: Category,
    extensions: &'a [String],
    filenames: &'a [String],
}

#[must_use]
pub fn run_languages(args: &LanguagesArgs, cli: &Cli) -> i32 {
    match run_languages_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Prints the registry, grouped by category.
///
/// # Errors
/// Returns an error if the config is invalid or JSON serialization fails.
pub fn run_languages_impl(args: &LanguagesArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let registry = build_registry(&config);
    let content = match args.format {
        OutputFormat::Text => format_languages_text(&registry, args.category),
        OutputFormat::Json => format_languages_json(&registry, args.category)?,
    };
    write_output(None, &content)
}

fn categories(filter: Option<Category>) -> Vec<Category> {
    filter.map_or_else(|| Category::ALL.to_vec(), |c| vec![c])
}

#[must_use]
pub fn format_languages_text(registry: &LanguageRegistry, filter: Option<Category>) -> String {
    let mut out = String::new();
    let mut total = 0;

    for category in categories(filter) {
        let languages = registry.by_category(category);
        if languages.is_empty() {
            continue;
        }
        total += languages.len();

        writeln!(out, "{category} ({}):", languages.len()).ok();
        for language in languages {
            writeln!(out, "  {:<20} {}", language.name, describe_files(language)).ok();
        }
        writeln!(out).ok();
    }

    writeln!(out, "{total} languages").ok();
    out
}

fn describe_files(language: &Language) -> String {
    language
        .extensions
        .iter()
        .map(|ext| format!(".{ext}"))
        .chain(language.filenames.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A JSON array of `{ name, category, extensions, filenames }`.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_languages_json(
    registry: &LanguageRegistry,
    filter: Option<Category>,
) -> Result<String> {
    let entries: Vec<LanguageEntry<'_>> = categories(filter)
        .into_iter()
        .flat_map(|category| registry.by_category(category))
        .map(|language| LanguageEntry {
            name: &language.name,
            category: language.category,
            extensions: &language.extensions,
            filenames: &language.filenames,
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&entries)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
