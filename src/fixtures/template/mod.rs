//! Fixture templates.
//!
//! A template emits lines tagged with the kind the counter is expected to
//! report. Lines are grouped into segments, and every segment is replayed
//! through a fresh [`LineScanner`] before it is kept: a segment whose lines do
//! not classify as tagged, or that leaves a comment or string open, cannot be
//! expressed in the target language and is dropped. The expected counts of a
//! generated fixture are therefore plain tallies of its tags.

mod complex;
mod edge_cases;
mod simple;

use tracing::debug;

use crate::counter::{LineKind, LineScanner};
use crate::language::{Language, MultiLineComment, PatternKind};

use super::model::{FixtureKind, LineCount};

pub use complex::ComplexTemplate;
pub use edge_cases::EdgeCasesTemplate;
pub use simple::SimpleTemplate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// One generated line and the kind it must be counted as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    pub text: String,
    pub kind: LineKind,
    pub ending: LineEnding,
}

impl TaggedLine {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            ending: LineEnding::Lf,
        }
    }

    #[must_use]
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Code)
    }

    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Comment)
    }

    #[must_use]
    pub fn blank() -> Self {
        Self::new("", LineKind::Blank)
    }

    #[must_use]
    pub const fn with_ending(mut self, ending: LineEnding) -> Self {
        self.ending = ending;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFixture {
    pub kind: FixtureKind,
    pub lines: Vec<TaggedLine>,
}

impl GeneratedFixture {
    /// File content. Every line carries its own terminator.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push_str(line.ending.as_str());
        }
        out
    }

    /// Expected counts, tallied from the line tags.
    #[must_use]
    pub fn counts(&self) -> LineCount {
        let mut counts = LineCount::default();
        for line in &self.lines {
            counts.total += 1;
            match line.kind {
                LineKind::Code => counts.code += 1,
                LineKind::Comment => counts.comments += 1,
                LineKind::Blank => counts.blank += 1,
            }
        }
        counts
    }
}

pub trait FixtureTemplate: Send + Sync {
    fn kind(&self) -> FixtureKind;

    fn generate(&self, language: &Language) -> GeneratedFixture;
}

/// The built-in templates, one per fixture kind.
#[must_use]
pub fn templates() -> Vec<Box<dyn FixtureTemplate>> {
    vec![
        Box::new(SimpleTemplate),
        Box::new(ComplexTemplate),
        Box::new(EdgeCasesTemplate),
    ]
}

/// Collects segments for one fixture, keeping only those the language can express.
pub(crate) struct FixtureBuilder<'a> {
    language: &'a Language,
    kind: FixtureKind,
    lines: Vec<TaggedLine>,
}

impl<'a> FixtureBuilder<'a> {
    pub(crate) const fn new(language: &'a Language, kind: FixtureKind) -> Self {
        Self {
            language,
            kind,
            lines: Vec::new(),
        }
    }

    /// Appends `lines` if they classify as tagged. Returns whether they were kept.
    pub(crate) fn segment(&mut self, label: &str, lines: Vec<TaggedLine>) -> bool {
        if lines.is_empty() {
            return false;
        }
        if let Some(reason) = self.reject_reason(&lines) {
            debug!(
                language = %self.language.name,
                kind = %self.kind,
                segment = label,
                reason,
                "Dropping fixture segment"
            );
            return false;
        }
        self.lines.extend(lines);
        true
    }

    /// Appends a segment when one could be built.
    pub(crate) fn optional(&mut self, label: &str, lines: Option<Vec<TaggedLine>>) -> bool {
        lines.is_some_and(|lines| self.segment(label, lines))
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(TaggedLine::blank());
    }

    pub(crate) fn finish(self) -> GeneratedFixture {
        GeneratedFixture {
            kind: self.kind,
            lines: self.lines,
        }
    }

    fn reject_reason(&self, lines: &[TaggedLine]) -> Option<String> {
        let mut scanner = LineScanner::new(self.language);
        for line in lines {
            if line.text.contains(['\r', '\n']) {
                return Some(format!("line break inside {:?}", line.text));
            }
            let actual = scanner.classify(&line.text);
            if actual != line.kind {
                return Some(format!(
                    "{:?} classifies as {actual:?}, expected {:?}",
                    line.text, line.kind
                ));
            }
        }
        if scanner.in_comment() || scanner.in_string() {
            return Some("segment leaves a comment or string open".to_string());
        }
        None
    }
}

/// Line comment marker, when the language has one.
pub(crate) fn line_marker(language: &Language) -> Option<&str> {
    language.comment_syntax.first_single_line()
}

/// A block comment with plain start and end markers.
pub(crate) fn plain_block(language: &Language) -> Option<&MultiLineComment> {
    language
        .comment_syntax
        .first_block()
        .filter(|block| block.kind == PatternKind::Static)
}

/// A whole-line comment holding `text`. Falls back to a one-line block comment.
pub(crate) fn comment_text(language: &Language, text: &str) -> Option<String> {
    if let Some(marker) = line_marker(language) {
        return Some(join_marker(marker, text));
    }
    let block = language.comment_syntax.first_block()?;
    if block.line_start {
        return None;
    }
    Some(format!("{} {text} {}", block.start, block.end))
}

/// Several comment lines, using line comments or else one block comment.
pub(crate) fn comment_block(language: &Language, texts: &[&str]) -> Option<Vec<TaggedLine>> {
    if let Some(marker) = line_marker(language) {
        return Some(
            texts
                .iter()
                .map(|text| TaggedLine::comment(join_marker(marker, text)))
                .collect(),
        );
    }
    block_comment(language, texts)
}

/// A multi-line block comment: the start marker, `texts`, the end marker.
pub(crate) fn block_comment(language: &Language, texts: &[&str]) -> Option<Vec<TaggedLine>> {
    let block = language.comment_syntax.first_block()?;
    let mut lines = vec![TaggedLine::comment(block.start.clone())];
    lines.extend(texts.iter().map(|text| TaggedLine::comment(format!("  {text}"))));
    lines.push(TaggedLine::comment(block.end.clone()));
    Some(lines)
}

/// A `"`-delimited string literal holding `content`, for languages that have one.
pub(crate) fn quoted(language: &Language, content: &str) -> Option<String> {
    language
        .string_syntax
        .has_double_quote()
        .then(|| format!("\"{content}\""))
}

/// Whether any comment marker of the language occurs in the code lines.
pub(crate) fn collides(language: &Language, lines: &[TaggedLine]) -> bool {
    lines
        .iter()
        .filter(|line| line.kind == LineKind::Code)
        .any(|line| {
            language
                .comment_syntax
                .markers()
                .any(|marker| !marker.is_empty() && line.text.contains(marker))
        })
}

/// Code lines that avoid common comment markers, for languages where the
/// flavoured bodies collide.
pub(crate) fn plain_body() -> Vec<TaggedLine> {
    ["value = 1", "total = value + 2", "result = total"]
        .into_iter()
        .map(TaggedLine::code)
        .collect()
}

/// `preferred` unless it collides with the language's markers.
pub(crate) fn body_or_plain(language: &Language, preferred: Vec<TaggedLine>) -> Vec<TaggedLine> {
    if collides(language, &preferred) {
        plain_body()
    } else {
        preferred
    }
}

fn join_marker(marker: &str, text: &str) -> String {
    if text.is_empty() {
        marker.to_string()
    } else {
        format!("{marker} {text}")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
