use super::*;
use crate::counter::LineKind;
use crate::language::LanguageRegistry;

fn generate(name: &str) -> GeneratedFixture {
    let registry = LanguageRegistry::default();
    ComplexTemplate.generate(registry.get_by_name(name).unwrap())
}

fn has_line(fixture: &GeneratedFixture, text: &str) -> bool {
    fixture.lines.iter().any(|l| l.text == text)
}

#[test]
fn python_uses_docstring_class() {
    let fixture = generate("Python");
    assert!(has_line(&fixture, "class DataProcessor:"));
    assert!(has_line(&fixture, "import os"));
    let docstring = fixture
        .lines
        .iter()
        .find(|l| l.text.contains("Processes records in batches."))
        .unwrap();
    assert_eq!(docstring.kind, LineKind::Comment);
}

#[test]
fn c_uses_brace_class_and_includes() {
    let fixture = generate("C");
    assert!(has_line(&fixture, "#include <stdio.h>"));
    assert!(has_line(&fixture, "class DataProcessor {"));
    assert!(has_line(&fixture, "/*"));
}

#[test]
fn marker_strings_are_code() {
    let fixture = generate("Rust");
    let strings: Vec<&TaggedLine> = fixture
        .lines
        .iter()
        .filter(|l| l.text.starts_with("message"))
        .collect();
    assert_eq!(strings.len(), 3);
    assert!(strings.iter().all(|l| l.kind == LineKind::Code));
}

#[test]
fn banner_is_marker_repeated() {
    let fixture = generate("Ruby");
    assert!(has_line(&fixture, &"#".repeat(BANNER_WIDTH)));
    assert!(has_line(&fixture, "# End of Ruby fixture"));
}

#[test]
fn pascal_brace_body_falls_back_to_plain_code() {
    let fixture = generate("Pascal");
    assert!(!has_line(&fixture, "class DataProcessor {"));
}
