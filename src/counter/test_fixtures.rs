//! Shared helpers for counter tests.

use crate::language::{Language, LanguageRegistry};

use super::{LineKind, LineStats, SlocCounter};

/// A built-in language by name.
pub fn builtin(name: &str) -> Language {
    LanguageRegistry::default()
        .get_by_name(name)
        .cloned()
        .unwrap_or_else(|| panic!("no built-in language named {name}"))
}

/// Per-line kinds for `source` in the named built-in language.
pub fn kinds(name: &str, source: &str) -> Vec<LineKind> {
    let language = builtin(name);
    SlocCounter::new(&language).classify_lines(source)
}

pub fn count(name: &str, source: &str) -> LineStats {
    let language = builtin(name);
    SlocCounter::new(&language).count(source)
}

pub const fn stats(code: usize, comment: usize, blank: usize) -> LineStats {
    LineStats {
        total: code + comment + blank,
        code,
        comment,
        blank,
    }
}
