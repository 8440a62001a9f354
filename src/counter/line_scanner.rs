use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::language::{
    CommentSyntax, Language, MultiLineComment, PatternKind, StringDelimiter, StringSyntax,
};

/// Longest escape sequence accepted inside a character literal (`'\u{10FFFF}'`).
const CHAR_LITERAL_MAX_ESCAPE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<'a> {
    Code,
    Block {
        start: &'a str,
        end: Cow<'a, str>,
        depth: usize,
        nested: bool,
        line_start: bool,
    },
    Docstring {
        close: &'a str,
    },
    Str {
        close: &'a str,
        raw: bool,
        multiline: bool,
    },
    RawStr {
        hashes: usize,
    },
}

#[derive(Debug)]
enum Token<'a> {
    Block(&'a MultiLineComment, Cow<'a, str>),
    Single,
    Docstring(&'a str),
    Str {
        close: &'a str,
        raw: bool,
        multiline: bool,
    },
    RawStr(usize),
}

#[derive(Debug, Default)]
struct LineFlags {
    code: bool,
    comment: bool,
}

/// Classifies lines one at a time, carrying block comment, docstring and
/// multi-line string state from one line to the next.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    comments: &'a CommentSyntax,
    strings: &'a StringSyntax,
    state: State<'a>,
}

impl<'a> LineScanner<'a> {
    #[must_use]
    pub const fn new(language: &'a Language) -> Self {
        Self::with_syntax(&language.comment_syntax, &language.string_syntax)
    }

    #[must_use]
    pub const fn with_syntax(comments: &'a CommentSyntax, strings: &'a StringSyntax) -> Self {
        Self {
            comments,
            strings,
            state: State::Code,
        }
    }

    /// Whether the scanner is inside a block comment or docstring.
    #[must_use]
    pub const fn in_comment(&self) -> bool {
        matches!(self.state, State::Block { .. } | State::Docstring { .. })
    }

    /// Whether the scanner is inside a string literal that continues past the line.
    #[must_use]
    pub const fn in_string(&self) -> bool {
        matches!(self.state, State::Str { .. } | State::RawStr { .. })
    }

    /// Classifies one line (without its terminator) and advances the state.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let mut flags = LineFlags {
            code: self.in_string(),
            comment: self.in_comment(),
        };

        let mut pos = 0;
        while pos < line.len() {
            pos = match self.state {
                State::Code => self.step_code(line, pos, &mut flags),
                State::Block { .. } => self.step_block(line, pos),
                State::Docstring { close } => self.step_docstring(line, pos, close),
                State::Str { close, raw, .. } => self.step_string(line, pos, close, raw),
                State::RawStr { hashes } => self.step_raw_string(line, pos, hashes),
            };
        }

        if matches!(
            self.state,
            State::Str {
                multiline: false,
                ..
            }
        ) {
            self.state = State::Code;
        }

        if flags.code {
            LineKind::Code
        } else if flags.comment {
            LineKind::Comment
        } else {
            LineKind::Blank
        }
    }

    fn step_code(&mut self, line: &str, pos: usize, flags: &mut LineFlags) -> usize {
        let Some(ch) = line[pos..].chars().next() else {
            return line.len();
        };
        if ch.is_whitespace() {
            return pos + ch.len_utf8();
        }

        let Some((len, token)) = self.match_token(line, pos) else {
            flags.code = true;
            return pos + ch.len_utf8();
        };

        match token {
            Token::Single => {
                flags.comment = true;
                return line.len();
            }
            Token::Block(comment, end) => {
                flags.comment = true;
                self.state = State::Block {
                    start: &comment.start,
                    end,
                    depth: 1,
                    nested: comment.nested,
                    line_start: comment.line_start,
                };
                if comment.line_start {
                    return line.len();
                }
            }
            Token::Docstring(close) => {
                flags.comment = true;
                self.state = State::Docstring { close };
            }
            Token::Str {
                close,
                raw,
                multiline,
            } => {
                flags.code = true;
                self.state = State::Str {
                    close,
                    raw,
                    multiline,
                };
            }
            Token::RawStr(hashes) => {
                flags.code = true;
                self.state = State::RawStr { hashes };
            }
        }
        pos + len
    }

    /// Finds the token starting at `pos`. The longest match wins; on equal
    /// length block comments beat line comments, which beat docstrings, which
    /// beat strings.
    fn match_token(&self, line: &str, pos: usize) -> Option<(usize, Token<'a>)> {
        let comments: &'a CommentSyntax = self.comments;
        let strings: &'a StringSyntax = self.strings;
        let rest = &line[pos..];
        let first_token = line[..pos].trim().is_empty();

        let mut best: Option<(usize, Token<'a>)> = None;
        let mut offer = |len: usize, token: Token<'a>| {
            if best.as_ref().is_none_or(|(current, _)| len > *current) {
                best = Some((len, token));
            }
        };

        for comment in &comments.multi_line {
            if let Some((len, end)) = block_start(comment, rest, first_token) {
                offer(len, Token::Block(comment, end));
            }
        }
        for marker in &comments.single_line {
            if rest.starts_with(marker.as_str()) {
                offer(marker.len(), Token::Single);
            }
        }
        for delimiter in &comments.docstrings {
            if rest.starts_with(delimiter.as_str()) {
                let token = if first_token {
                    Token::Docstring(delimiter)
                } else {
                    Token::Str {
                        close: delimiter,
                        raw: false,
                        multiline: true,
                    }
                };
                offer(delimiter.len(), token);
            }
        }
        if strings.rust_raw_strings
            && let Some((len, hashes)) = rust_raw_string_open(line, pos)
        {
            offer(len, Token::RawStr(hashes));
        }
        for delimiter in &strings.delimiters {
            if rest.starts_with(delimiter.open.as_str())
                && (!delimiter.char_literal || self.is_char_literal(rest, delimiter))
            {
                offer(
                    delimiter.open.len(),
                    Token::Str {
                        close: &delimiter.close,
                        raw: delimiter.raw,
                        multiline: delimiter.multiline,
                    },
                );
            }
        }

        best
    }

    fn step_block(&mut self, line: &str, pos: usize) -> usize {
        let State::Block {
            start,
            end,
            depth,
            nested,
            line_start,
        } = &mut self.state
        else {
            return line.len();
        };

        if *line_start {
            if is_marker(line.trim_start(), &**end) {
                self.state = State::Code;
            }
            return line.len();
        }

        let rest = &line[pos..];
        if *nested && rest.starts_with(*start) {
            *depth += 1;
            return pos + start.len();
        }
        if rest.starts_with(&**end) {
            let next = pos + end.len();
            *depth -= 1;
            if *depth == 0 {
                self.state = State::Code;
            }
            return next;
        }
        pos + next_char_len(rest)
    }

    fn step_docstring(&mut self, line: &str, pos: usize, close: &str) -> usize {
        let rest = &line[pos..];
        if let Some(skip) = self.escape_len(rest) {
            return pos + skip;
        }
        if rest.starts_with(close) {
            self.state = State::Code;
            return pos + close.len();
        }
        pos + next_char_len(rest)
    }

    fn step_string(&mut self, line: &str, pos: usize, close: &str, raw: bool) -> usize {
        let rest = &line[pos..];
        if !raw && let Some(skip) = self.escape_len(rest) {
            return pos + skip;
        }
        if rest.starts_with(close) {
            self.state = State::Code;
            return pos + close.len();
        }
        pos + next_char_len(rest)
    }

    fn step_raw_string(&mut self, line: &str, pos: usize, hashes: usize) -> usize {
        let rest = &line[pos..];
        if let Some(after) = rest.strip_prefix('"')
            && after.len() >= hashes
            && after.bytes().take(hashes).all(|b| b == b'#')
        {
            self.state = State::Code;
            return pos + 1 + hashes;
        }
        pos + next_char_len(rest)
    }

    /// Length of an escape sequence at the start of `text`: the escape
    /// character plus the character it escapes.
    fn escape_len(&self, text: &str) -> Option<usize> {
        let escape = self.strings.escape?;
        let after = text.strip_prefix(escape)?;
        Some(escape.len_utf8() + after.chars().next().map_or(0, char::len_utf8))
    }

    /// A character-literal delimiter only opens a literal when it closes after
    /// one character or one short escape sequence, so `'a'` is a literal and
    /// the lifetime in `&'a str` is not.
    fn is_char_literal(&self, rest: &str, delimiter: &StringDelimiter) -> bool {
        let body = &rest[delimiter.open.len()..];
        let close = delimiter.close.as_str();
        if body.starts_with(close) {
            return false;
        }

        let mut chars = body.char_indices();
        let Some((_, first)) = chars.next() else {
            return false;
        };
        if delimiter.raw || Some(first) != self.strings.escape {
            return body[first.len_utf8()..].starts_with(close);
        }

        chars.next();
        chars
            .take(CHAR_LITERAL_MAX_ESCAPE)
            .any(|(idx, _)| body[idx..].starts_with(close))
    }
}

fn block_start<'a>(
    comment: &'a MultiLineComment,
    rest: &str,
    first_token: bool,
) -> Option<(usize, Cow<'a, str>)> {
    match comment.kind {
        PatternKind::Static => {
            if !rest.starts_with(comment.start.as_str()) {
                return None;
            }
            if comment.line_start && !(first_token && is_marker(rest, &comment.start)) {
                return None;
            }
            Some((comment.start.len(), Cow::Borrowed(comment.end.as_str())))
        }
        PatternKind::LuaLongBracket => {
            let after = rest.strip_prefix("--[")?;
            let level = after.bytes().take_while(|&b| b == b'=').count();
            (after.as_bytes().get(level) == Some(&b'['))
                .then(|| (4 + level, Cow::Owned(format!("]{}]", "=".repeat(level)))))
        }
    }
}

/// `marker` at the start of `text`, followed by whitespace or the end of the line.
fn is_marker(text: &str, marker: &str) -> bool {
    text.strip_prefix(marker)
        .is_some_and(|after| after.chars().next().is_none_or(char::is_whitespace))
}

/// Matches `r"`, `r#"`, `br##"` and so on at `pos`, returning the opener
/// length and the number of hashes.
fn rust_raw_string_open(line: &str, pos: usize) -> Option<(usize, usize)> {
    let after_r = line[pos..].strip_prefix('r')?;
    let hashes = after_r.bytes().take_while(|&b| b == b'#').count();
    if after_r.as_bytes().get(hashes) != Some(&b'"') {
        return None;
    }

    let before = &line[..pos];
    let prefix_ok = match before.chars().next_back() {
        None => true,
        Some(c @ ('b' | 'c')) => !before[..before.len() - c.len_utf8()]
            .chars()
            .next_back()
            .is_some_and(is_ident_char),
        Some(c) => !is_ident_char(c),
    };
    prefix_ok.then_some((2 + hashes, hashes))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn next_char_len(text: &str) -> usize {
    text.chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
#[path = "line_scanner_tests/mod.rs"]
mod tests;
