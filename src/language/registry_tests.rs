use std::collections::HashMap;
use std::path::Path;

use super::*;
use crate::language::StringSyntax;

fn shell() -> Language {
    Language::new(
        "Shell",
        Category::Scripting,
        vec!["sh", "bash"],
        CommentSyntax::new(vec!["#"], vec![]),
    )
}

#[test]
fn registry_register_and_lookup() {
    let mut registry = LanguageRegistry::new();
    registry.register(shell());

    assert!(registry.get_by_extension("sh").is_some());
    assert!(registry.get_by_extension("bash").is_some());
    assert_eq!(registry.get_by_extension("sh").unwrap().name, "Shell");
}

#[test]
fn extension_lookup_is_case_insensitive() {
    let mut registry = LanguageRegistry::new();
    registry.register(shell());

    assert_eq!(registry.get_by_extension("SH").unwrap().name, "Shell");
    assert_eq!(registry.get_by_extension(".Bash").unwrap().name, "Shell");
}

#[test]
fn name_lookup_is_case_insensitive() {
    let registry = LanguageRegistry::default();
    assert_eq!(registry.get_by_name("rust").unwrap().name, "Rust");
    assert_eq!(registry.get_by_name("C++").unwrap().name, "C++");
    assert!(registry.get_by_name("Klingon").is_none());
}

#[test]
fn later_registration_wins_extension_conflict() {
    let mut registry = LanguageRegistry::new();
    registry.register(shell());
    registry.register(Language::new(
        "Bash",
        Category::Scripting,
        vec!["bash"],
        CommentSyntax::new(vec!["#"], vec![]),
    ));

    assert_eq!(registry.get_by_extension("bash").unwrap().name, "Bash");
    assert_eq!(registry.get_by_extension("sh").unwrap().name, "Shell");
}

#[test]
fn same_name_replaces_in_place() {
    let mut registry = LanguageRegistry::new();
    registry.register(shell());
    registry.register(Language::new(
        "shell",
        Category::Scripting,
        vec!["zsh"],
        CommentSyntax::new(vec!["#"], vec![]),
    ));

    assert_eq!(registry.all().len(), 1);
    assert!(registry.get_by_extension("sh").is_none());
    assert_eq!(registry.get_by_extension("zsh").unwrap().name, "shell");
}

#[test]
fn filename_lookup_is_exact() {
    let registry = LanguageRegistry::default();
    assert_eq!(registry.get_by_filename("Makefile").unwrap().name, "Makefile");
    assert_eq!(
        registry.get_by_filename("Dockerfile").unwrap().name,
        "Dockerfile"
    );
    assert!(registry.get_by_filename("MAKEFILE.txt").is_none());
}

#[test]
fn detect_prefers_filename_over_extension() {
    let registry = LanguageRegistry::default();
    let lang = registry.detect(Path::new("build/CMakeLists.txt"), None).unwrap();
    assert_eq!(lang.name, "CMake");
}

#[test]
fn detect_uses_extension() {
    let registry = LanguageRegistry::default();
    let lang = registry.detect(Path::new("src/main.RS"), None).unwrap();
    assert_eq!(lang.name, "Rust");
}

#[test]
fn detect_falls_back_to_shebang() {
    let registry = LanguageRegistry::default();
    let script = Path::new("bin/deploy");

    assert_eq!(
        registry
            .detect(script, Some("#!/usr/bin/env python3"))
            .unwrap()
            .name,
        "Python"
    );
    assert_eq!(
        registry.detect(script, Some("#!/bin/bash")).unwrap().name,
        "Shell"
    );
    assert!(registry.detect(script, Some("plain text")).is_none());
    assert!(registry.detect(script, None).is_none());
}

#[test]
fn list_by_category_is_ordered_and_sorted() {
    let registry = LanguageRegistry::default();
    let listing = registry.list_by_category();

    let categories: Vec<Category> = listing.keys().copied().collect();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
    assert_eq!(categories.first(), Some(&Category::Common));

    for names in listing.values() {
        let mut expected = names.clone();
        expected.sort_by_key(|n| n.to_lowercase());
        assert_eq!(names, &expected);
    }
}

#[test]
fn custom_language_overrides_builtin() {
    let mut custom = HashMap::new();
    custom.insert(
        "CustomRust".to_string(),
        CustomLanguageConfig {
            extensions: vec!["rs".to_string()],
            single_line_comments: vec!["--".to_string()],
            multi_line_comments: vec![("{-".to_string(), "-}".to_string())],
            ..Default::default()
        },
    );

    let registry = LanguageRegistry::with_custom_languages(&custom);
    let rust = registry.get_by_extension("rs").unwrap();

    assert_eq!(rust.name, "CustomRust");
    assert_eq!(rust.category, Category::Domain);
    assert!(rust.comment_syntax.single_line.contains(&"--".to_string()));
    assert_eq!(rust.comment_syntax.multi_line[0].start, "{-");
    assert_eq!(rust.string_syntax, StringSyntax::default());
}

#[test]
fn custom_language_adds_filename_and_keeps_builtins() {
    let mut custom = HashMap::new();
    custom.insert(
        "Justfile".to_string(),
        CustomLanguageConfig {
            filenames: vec!["justfile".to_string()],
            single_line_comments: vec!["#".to_string()],
            category: Some(Category::Config),
            ..Default::default()
        },
    );

    let registry = LanguageRegistry::with_custom_languages(&custom);

    let just = registry.get_by_filename("justfile").unwrap();
    assert_eq!(just.name, "Justfile");
    assert_eq!(just.category, Category::Config);
    assert_eq!(registry.get_by_extension("rs").unwrap().name, "Rust");
}
