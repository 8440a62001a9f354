use crate::fixtures::model::FixtureKind;
use crate::language::Language;

use super::{
    FixtureBuilder, FixtureTemplate, GeneratedFixture, TaggedLine, block_comment, body_or_plain,
    comment_block, comment_text, line_marker, plain_block, quoted,
};

const BANNER_WIDTH: usize = 50;

/// A realistic-looking file: documentation header, imports, a class with
/// documented methods, strings holding comment markers and a banner trailer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexTemplate;

impl FixtureTemplate for ComplexTemplate {
    fn kind(&self) -> FixtureKind {
        FixtureKind::Complex
    }

    fn generate(&self, language: &Language) -> GeneratedFixture {
        let mut builder = FixtureBuilder::new(language, FixtureKind::Complex);

        let title = format!("Complex {} fixture", language.name);
        let header_text = [
            title.as_str(),
            "",
            "Exercises documentation blocks, imports,",
            "class bodies and strings that contain",
            "comment markers.",
            "",
            "Expected counts live in expected.json.",
        ];
        let header = block_comment(language, &header_text)
            .or_else(|| comment_block(language, &header_text));
        if builder.optional("header", header) {
            builder.blank();
        }

        if builder.optional("imports", imports(language)) {
            builder.blank();
        }

        let class = if language.indent_based && !language.comment_syntax.docstrings.is_empty() {
            docstring_class(language)
        } else {
            brace_class(language)
        };
        if builder.segment("class", class) {
            builder.blank();
        }

        if builder.optional("marker strings", marker_strings(language)) {
            builder.blank();
        }

        builder.optional("banner", banner(language));
        builder.finish()
    }
}

fn imports(language: &Language) -> Option<Vec<TaggedLine>> {
    let lines: &[&str] = match language.name.as_str() {
        "Python" => &["import os", "import sys", "from typing import List"],
        "JavaScript" | "TypeScript" => &[
            "import fs from 'fs';",
            "import path from 'path';",
        ],
        "C" | "C++" => &["#include <stdio.h>", "#include <stdlib.h>"],
        "Java" => &["import java.util.List;", "import java.util.Map;"],
        "Rust" => &["use std::collections::HashMap;", "use std::io;"],
        "Go" => &["import \"fmt\""],
        _ => return None,
    };
    Some(lines.iter().copied().map(TaggedLine::code).collect())
}

fn docstring_class(language: &Language) -> Vec<TaggedLine> {
    let quote = language
        .comment_syntax
        .docstrings
        .first()
        .map_or("\"\"\"", String::as_str);
    vec![
        TaggedLine::code("class DataProcessor:"),
        TaggedLine::comment(format!("    {quote}Processes records in batches.{quote}")),
        TaggedLine::blank(),
        TaggedLine::code("    def __init__(self, config):"),
        TaggedLine::comment(format!("        {quote}Create a processor.")),
        TaggedLine::comment("        The config holds batch settings."),
        TaggedLine::comment(format!("        {quote}")),
        TaggedLine::code("        self.config = config"),
        TaggedLine::code("        self.results = []"),
        TaggedLine::blank(),
        TaggedLine::code("    def process(self, items):"),
        TaggedLine::comment(format!("        {quote}Process every item.{quote}")),
        TaggedLine::code("        for item in items:"),
        TaggedLine::code("            self.results.append(item)"),
        TaggedLine::code("        return self.results"),
    ]
}

fn brace_class(language: &Language) -> Vec<TaggedLine> {
    let mut lines: Vec<TaggedLine> = [
        "class DataProcessor {",
        "    constructor(config) {",
        "        this.config = config;",
        "        this.results = [];",
        "    }",
        "",
        "    process(items) {",
        "        for (item in items) {",
        "            this.results.push(item);",
        "        }",
        "        return this.results;",
        "    }",
        "}",
    ]
    .into_iter()
    .map(|text| {
        if text.is_empty() {
            TaggedLine::blank()
        } else {
            TaggedLine::code(text)
        }
    })
    .collect();

    lines = body_or_plain(language, lines);
    if let Some(comment) = comment_text(language, "Processes records in batches") {
        lines.insert(0, TaggedLine::comment(comment));
    }
    lines
}

/// String literals whose content is a comment marker of the language.
fn marker_strings(language: &Language) -> Option<Vec<TaggedLine>> {
    let escape = language.string_syntax.escape;
    let mut markers: Vec<&str> = line_marker(language).into_iter().collect();
    if let Some(block) = plain_block(language) {
        markers.push(&block.start);
        markers.push(&block.end);
    }

    let lines: Vec<TaggedLine> = markers
        .into_iter()
        .filter(|marker| !marker.contains('"') && escape.is_none_or(|c| !marker.contains(c)))
        .enumerate()
        .filter_map(|(idx, marker)| {
            quoted(language, &format!("text {marker} inside a string"))
                .map(|literal| TaggedLine::code(format!("message{idx} = {literal}")))
        })
        .collect();
    (!lines.is_empty()).then_some(lines)
}

fn banner(language: &Language) -> Option<Vec<TaggedLine>> {
    let marker = line_marker(language)?;
    Some(vec![
        TaggedLine::comment(marker.repeat(BANNER_WIDTH)),
        TaggedLine::comment(format!("{marker} End of {} fixture", language.name)),
    ])
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
