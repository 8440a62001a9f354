use super::*;
use crate::counter::LineKind;
use crate::fixtures::model::LineCount;
use crate::language::LanguageRegistry;

fn generate(name: &str) -> GeneratedFixture {
    let registry = LanguageRegistry::default();
    EdgeCasesTemplate.generate(registry.get_by_name(name).unwrap())
}

#[test]
fn rust_edge_cases_counts() {
    let fixture = generate("Rust");
    assert_eq!(fixture.counts(), LineCount::new(35, 13, 12, 10));
}

#[test]
fn unicode_comment_is_kept() {
    let fixture = generate("Rust");
    assert!(fixture.lines.iter().any(|l| l.text.contains("🌍")));
}

#[test]
fn url_with_marker_is_code() {
    let fixture = generate("Python");
    let url = fixture
        .lines
        .iter()
        .find(|l| l.text.starts_with("url = "))
        .unwrap();
    assert_eq!(url.text, "url = \"http://example.com#not-a-comment\"");
    assert_eq!(url.kind, LineKind::Code);
}

#[test]
fn real_line_endings_are_rendered() {
    let rendered = generate("Rust").render();
    assert!(rendered.contains("crlf_line = 1\r\n"));
    assert!(rendered.contains("cr_line = 2\r//"));
}

#[test]
fn nested_comment_only_for_nesting_languages() {
    let rust = generate("Rust");
    assert!(rust.lines.iter().any(|l| l.text == " Nested comment"));
    let c = generate("C");
    assert!(!c.lines.iter().any(|l| l.text == " Nested comment"));
}

#[test]
fn long_line_has_fifty_terms() {
    let fixture = generate("Go");
    let line = fixture
        .lines
        .iter()
        .find(|l| l.text.starts_with("x = 0 + 1"))
        .unwrap();
    assert!(line.text.contains("+ 49"));
    assert!(line.text.len() > 200);
}
