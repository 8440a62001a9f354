use crate::fixtures::model::FixtureKind;
use crate::language::Language;

use super::{
    FixtureBuilder, FixtureTemplate, GeneratedFixture, TaggedLine, block_comment, body_or_plain,
    comment_block, comment_text,
};

/// Header comments, a short body, a mixed line and a block comment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTemplate;

impl FixtureTemplate for SimpleTemplate {
    fn kind(&self) -> FixtureKind {
        FixtureKind::Simple
    }

    fn generate(&self, language: &Language) -> GeneratedFixture {
        let mut builder = FixtureBuilder::new(language, FixtureKind::Simple);

        let title = format!("Simple {} fixture", language.name);
        let header = comment_block(language, &[&title, "Exercises basic line classification"]);
        if builder.optional("header", header) {
            builder.blank();
        }

        builder.segment("body", body_or_plain(language, body(language)));
        builder.blank();

        let mixed = comment_text(language, "trailing comment")
            .map(|comment| vec![TaggedLine::code(format!("result = compute()  {comment}"))]);
        builder.optional("mixed", mixed);

        let block = block_comment(language, &["Block comment", "spanning several lines"]);
        builder.optional("block", block);

        builder.finish()
    }
}

fn body(language: &Language) -> Vec<TaggedLine> {
    let lines: &[&str] = if language.indent_based {
        &["def main():", "    x = 10", "    y = 20", "    return x + y"]
    } else {
        &[
            "function main() {",
            "    x = 10;",
            "    y = 20;",
            "    return x + y;",
            "}",
        ]
    };
    lines.iter().copied().map(TaggedLine::code).collect()
}

#[cfg(test)]
#[path = "simple_tests.rs"]
mod tests;
