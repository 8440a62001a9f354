use crate::fixtures::model::FixtureKind;
use crate::language::Language;

use super::{
    FixtureBuilder, FixtureTemplate, GeneratedFixture, LineEnding, TaggedLine, comment_block,
    comment_text, line_marker, plain_block, quoted,
};

const LONG_LINE_TERMS: usize = 50;

/// Inputs that commonly trip up comment detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeCasesTemplate;

impl FixtureTemplate for EdgeCasesTemplate {
    fn kind(&self) -> FixtureKind {
        FixtureKind::EdgeCases
    }

    fn generate(&self, language: &Language) -> GeneratedFixture {
        let mut builder = FixtureBuilder::new(language, FixtureKind::EdgeCases);

        let title = format!("Edge case tests for {}", language.name);
        let unicode = comment_block(
            language,
            &[&title, "Unicode: 你好世界 🌍 مرحبا بالعالم"],
        );
        if builder.optional("unicode comments", unicode) {
            builder.blank();
        }

        let sections: [(&str, fn(&Language) -> Option<Vec<TaggedLine>>); 7] = [
            ("marker in strings", marker_in_strings),
            ("escaped strings", escaped_strings),
            ("nested comment", nested_comment),
            ("simulated endings", simulated_endings),
            ("real endings", real_endings),
            ("long line", long_line),
            ("empty comments", empty_comments),
        ];
        for (label, build) in sections {
            if builder.optional(label, build(language)) {
                builder.blank();
            }
        }

        builder.blank();
        builder.blank();

        builder.optional("marker-only strings", marker_only_strings(language));
        builder.optional("trailing whitespace", trailing_whitespace(language));
        builder.finish()
    }
}

fn marker_in_strings(language: &Language) -> Option<Vec<TaggedLine>> {
    let marker = line_marker(language).unwrap_or("//");
    let url = quoted(language, &format!("http://example.com{marker}not-a-comment"))?;
    let pattern = quoted(language, &format!("{marker}\\s*(.*)$"))?;
    let mut lines = vec![TaggedLine::code(format!("url = {url}"))];
    let regex = match comment_text(language, "Pattern to match comments") {
        Some(comment) => format!("regex = {pattern}  {comment}"),
        None => format!("regex = {pattern}"),
    };
    lines.push(TaggedLine::code(regex));
    Some(lines)
}

fn escaped_strings(language: &Language) -> Option<Vec<TaggedLine>> {
    let escape = language.string_syntax.escape?;
    let quotes = quoted(
        language,
        &format!("This has {escape}\"quotes{escape}\" and {escape}{escape}n newlines"),
    )?;
    let path = quoted(
        language,
        &format!("C:{escape}{escape}Users{escape}{escape}file.txt"),
    )?;
    Some(vec![
        TaggedLine::code(format!("escaped = {quotes}")),
        TaggedLine::code(format!("path = {path}")),
    ])
}

fn nested_comment(language: &Language) -> Option<Vec<TaggedLine>> {
    let block = language
        .comment_syntax
        .multi_line
        .iter()
        .find(|block| block.nested)?;
    Some(vec![
        TaggedLine::comment(block.start.clone()),
        TaggedLine::comment(" Outer comment"),
        TaggedLine::comment(format!(" {}", block.start)),
        TaggedLine::comment(" Nested comment"),
        TaggedLine::comment(format!(" {}", block.end)),
        TaggedLine::comment(" Still in outer comment"),
        TaggedLine::comment(block.end.clone()),
    ])
}

/// Escape sequences that spell out line endings inside a literal.
fn simulated_endings(language: &Language) -> Option<Vec<TaggedLine>> {
    let literal = quoted(language, "line1\\rline2\\nline3\\r\\n")?;
    let line = match comment_text(language, "Different line endings") {
        Some(comment) => format!("mixed_endings = {literal}  {comment}"),
        None => format!("mixed_endings = {literal}"),
    };
    Some(vec![TaggedLine::code(line)])
}

/// Lines terminated by CRLF and by a lone CR.
fn real_endings(language: &Language) -> Option<Vec<TaggedLine>> {
    let mut lines = vec![
        TaggedLine::code("crlf_line = 1").with_ending(LineEnding::CrLf),
        TaggedLine::code("cr_line = 2").with_ending(LineEnding::Cr),
    ];
    if let Some(comment) = comment_text(language, "Comment ended by CRLF") {
        lines.push(TaggedLine::comment(comment).with_ending(LineEnding::CrLf));
    }
    lines.push(TaggedLine::code("lf_line = 3"));
    Some(lines)
}

fn long_line(language: &Language) -> Option<Vec<TaggedLine>> {
    let terms: Vec<String> = (0..LONG_LINE_TERMS).map(|i| i.to_string()).collect();
    let mut line = format!("x = {}", terms.join(" + "));
    if let Some(comment) = comment_text(language, "Long line with many operations") {
        line.push_str("  ");
        line.push_str(&comment);
    }
    Some(vec![TaggedLine::code(line)])
}

fn empty_comments(language: &Language) -> Option<Vec<TaggedLine>> {
    let marker = line_marker(language)?;
    Some(vec![
        TaggedLine::comment(marker),
        TaggedLine::comment(format!("{marker} ")),
    ])
}

/// Strings whose whole content is a comment marker.
fn marker_only_strings(language: &Language) -> Option<Vec<TaggedLine>> {
    let mut lines = Vec::new();
    if let Some(marker) = line_marker(language) {
        lines.push(TaggedLine::code(format!(
            "comment_marker = {}",
            quoted(language, marker)?
        )));
    }
    if let Some(block) = plain_block(language) {
        lines.push(TaggedLine::code(format!(
            "block_start = {}",
            quoted(language, &block.start)?
        )));
        lines.push(TaggedLine::code(format!(
            "block_end = {}",
            quoted(language, &block.end)?
        )));
    }
    (!lines.is_empty()).then_some(lines)
}

fn trailing_whitespace(language: &Language) -> Option<Vec<TaggedLine>> {
    let marker = line_marker(language)?;
    Some(vec![TaggedLine::code(format!(
        "trailing = 'value'    {marker} Comment after spaces    "
    ))])
}

#[cfg(test)]
#[path = "edge_cases_tests.rs"]
mod tests;
