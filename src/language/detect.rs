use std::sync::LazyLock;

use regex::Regex;

static VERSIONED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: pattern is a compile-time constant
    Regex::new(r"^([A-Za-z_+-]*[A-Za-z])[0-9.]*$").expect("valid interpreter pattern")
});

/// Extracts the interpreter name from a shebang line.
///
/// `#!/usr/bin/env -S python3.11 -u` yields `python`, `#!/bin/bash` yields `bash`.
#[must_use]
pub fn interpreter_from_shebang(line: &str) -> Option<String> {
    let rest = line.strip_prefix("#!")?;
    let mut tokens = rest.split_whitespace();

    let program = base_name(tokens.next()?);
    let program = if program == "env" {
        base_name(tokens.find(|t| !t.starts_with('-') && !t.contains('='))?)
    } else {
        program
    };

    let name = VERSIONED_NAME
        .captures(program)
        .and_then(|c| c.get(1))
        .map_or(program, |m| m.as_str());

    (!name.is_empty()).then(|| name.to_string())
}

fn base_name(token: &str) -> &str {
    token.rsplit('/').next().unwrap_or(token)
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
