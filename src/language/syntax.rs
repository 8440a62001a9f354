/// Pattern kind for multi-line comment markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternKind {
    /// Fixed `start`/`end` strings.
    #[default]
    Static,
    /// Lua long bracket comment: `--[` `=`* `[` closed by `]` `=`* `]` with the same level.
    LuaLongBracket,
}

/// A block comment definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLineComment {
    pub start: String,
    pub end: String,
    /// Block comments of this kind may nest (Rust, Swift, Haskell, ...).
    pub nested: bool,
    /// Both markers must be the first token on their line (Ruby `=begin`, Perl POD).
    pub line_start: bool,
    pub kind: PatternKind,
}

impl MultiLineComment {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            nested: false,
            line_start: false,
            kind: PatternKind::Static,
        }
    }

    #[must_use]
    pub const fn with_nesting(mut self) -> Self {
        self.nested = true;
        self
    }

    #[must_use]
    pub const fn at_line_start(mut self) -> Self {
        self.line_start = true;
        self
    }

    /// Lua `--[[ ... ]]` and its levelled `--[==[ ... ]==]` forms.
    #[must_use]
    pub fn lua_long_bracket() -> Self {
        Self {
            kind: PatternKind::LuaLongBracket,
            ..Self::new("--[[", "]]")
        }
    }
}

impl From<(&str, &str)> for MultiLineComment {
    fn from((start, end): (&str, &str)) -> Self {
        Self::new(start, end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentSyntax {
    pub single_line: Vec<String>,
    pub multi_line: Vec<MultiLineComment>,
    /// Triple-quoted strings that count as comments when they open a line.
    pub docstrings: Vec<String>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: Vec<&str>, multi_line: Vec<(&str, &str)>) -> Self {
        Self::with_multi_line(
            single_line,
            multi_line.into_iter().map(MultiLineComment::from).collect(),
        )
    }

    #[must_use]
    pub fn with_multi_line(single_line: Vec<&str>, multi_line: Vec<MultiLineComment>) -> Self {
        Self {
            single_line: single_line.into_iter().map(String::from).collect(),
            multi_line,
            docstrings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_docstrings(mut self, delimiters: Vec<&str>) -> Self {
        self.docstrings = delimiters.into_iter().map(String::from).collect();
        self
    }

    #[must_use]
    pub fn first_single_line(&self) -> Option<&str> {
        self.single_line.first().map(String::as_str)
    }

    /// First block comment with fixed markers.
    #[must_use]
    pub fn first_block(&self) -> Option<&MultiLineComment> {
        self.multi_line
            .iter()
            .find(|c| c.kind == PatternKind::Static && !c.line_start)
            .or_else(|| self.multi_line.first())
    }

    #[must_use]
    pub fn supports_nesting(&self) -> bool {
        self.multi_line.iter().any(|c| c.nested)
    }

    /// Every marker string, used to check generated text for collisions.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.single_line
            .iter()
            .map(String::as_str)
            .chain(
                self.multi_line
                    .iter()
                    .flat_map(|c| [c.start.as_str(), c.end.as_str()]),
            )
            .chain(self.docstrings.iter().map(String::as_str))
    }
}

/// A string literal delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringDelimiter {
    pub open: String,
    pub close: String,
    /// The literal may continue past the end of the line.
    pub multiline: bool,
    /// No escape processing inside the literal.
    pub raw: bool,
    /// Only a literal when closed within a few characters (`'x'`, `'\n'`).
    pub char_literal: bool,
}

impl StringDelimiter {
    #[must_use]
    pub fn quote(delimiter: &str) -> Self {
        Self {
            open: delimiter.to_string(),
            close: delimiter.to_string(),
            multiline: false,
            raw: false,
            char_literal: false,
        }
    }

    #[must_use]
    pub fn pair(open: &str, close: &str) -> Self {
        Self {
            close: close.to_string(),
            ..Self::quote(open)
        }
    }

    #[must_use]
    pub fn char_literal(delimiter: &str) -> Self {
        Self {
            char_literal: true,
            ..Self::quote(delimiter)
        }
    }

    #[must_use]
    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    #[must_use]
    pub const fn raw(mut self) -> Self {
        self.raw = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSyntax {
    pub delimiters: Vec<StringDelimiter>,
    pub escape: Option<char>,
    /// Skip Rust raw strings (`r"..."`, `r#"..."#`).
    pub rust_raw_strings: bool,
}

impl Default for StringSyntax {
    fn default() -> Self {
        Self::new(
            vec![StringDelimiter::quote("\""), StringDelimiter::quote("'")],
            Some('\\'),
        )
    }
}

impl StringSyntax {
    #[must_use]
    pub const fn new(delimiters: Vec<StringDelimiter>, escape: Option<char>) -> Self {
        Self {
            delimiters,
            escape,
            rust_raw_strings: false,
        }
    }

    /// No string literals at all (markup, plain config formats).
    #[must_use]
    pub const fn none() -> Self {
        Self::new(Vec::new(), None)
    }

    /// Only `"` strings, with backslash escapes.
    #[must_use]
    pub fn double_only() -> Self {
        Self::new(vec![StringDelimiter::quote("\"")], Some('\\'))
    }

    #[must_use]
    pub const fn without_escape(mut self) -> Self {
        self.escape = None;
        self
    }

    #[must_use]
    pub const fn with_rust_raw_strings(mut self) -> Self {
        self.rust_raw_strings = true;
        self
    }

    /// Whether plain `"` is a single-line string delimiter.
    #[must_use]
    pub fn has_double_quote(&self) -> bool {
        self.delimiters
            .iter()
            .any(|d| d.open == "\"" && d.close == "\"" && !d.char_literal)
    }
}
