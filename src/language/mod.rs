mod builtin;
mod detect;
mod registry;
mod syntax;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NxlcError;

pub use detect::interpreter_from_shebang;
pub use registry::LanguageRegistry;
pub use syntax::{CommentSyntax, MultiLineComment, PatternKind, StringDelimiter, StringSyntax};

/// Language family, used for grouping and for the fixture directory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Common,
    Web,
    Systems,
    Scripting,
    Database,
    Legacy,
    Functional,
    Scientific,
    Markup,
    Config,
    Domain,
}

impl Category {
    pub const ALL: [Self; 11] = [
        Self::Common,
        Self::Web,
        Self::Systems,
        Self::Scripting,
        Self::Database,
        Self::Legacy,
        Self::Functional,
        Self::Scientific,
        Self::Markup,
        Self::Config,
        Self::Domain,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Web => "web",
            Self::Systems => "systems",
            Self::Scripting => "scripting",
            Self::Database => "database",
            Self::Legacy => "legacy",
            Self::Functional => "functional",
            Self::Scientific => "scientific",
            Self::Markup => "markup",
            Self::Config => "config",
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = NxlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| NxlcError::Config(format!("Unknown category: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub category: Category,
    /// Lowercase extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Exact file names such as `Makefile`.
    pub filenames: Vec<String>,
    /// Shebang interpreter names such as `python` or `bash`.
    pub interpreters: Vec<String>,
    pub comment_syntax: CommentSyntax,
    pub string_syntax: StringSyntax,
    /// Blocks are delimited by indentation rather than braces.
    pub indent_based: bool,
}

impl Language {
    #[must_use]
    pub fn new(
        name: &str,
        category: Category,
        extensions: Vec<&str>,
        comment_syntax: CommentSyntax,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            extensions: extensions.into_iter().map(str::to_lowercase).collect(),
            filenames: Vec::new(),
            interpreters: Vec::new(),
            comment_syntax,
            string_syntax: StringSyntax::default(),
            indent_based: false,
        }
    }

    #[must_use]
    pub fn with_strings(mut self, string_syntax: StringSyntax) -> Self {
        self.string_syntax = string_syntax;
        self
    }

    #[must_use]
    pub fn with_filenames(mut self, filenames: Vec<&str>) -> Self {
        self.filenames = filenames.into_iter().map(String::from).collect();
        self
    }

    #[must_use]
    pub fn with_interpreters(mut self, interpreters: Vec<&str>) -> Self {
        self.interpreters = interpreters.into_iter().map(String::from).collect();
        self
    }

    #[must_use]
    pub const fn indent_based(mut self) -> Self {
        self.indent_based = true;
        self
    }

    /// Directory name for this language's fixtures.
    #[must_use]
    pub fn dir_name(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
