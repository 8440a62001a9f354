const BOM: char = '\u{feff}';

/// Splits text into lines on `\r\n`, `\n` and lone `\r`.
///
/// A trailing terminator does not produce an extra empty line, and empty
/// input has no lines at all.
#[must_use]
pub const fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Removes a leading UTF-8 byte order mark.
#[must_use]
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(idx) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..idx];
        let terminator = if self.rest[idx..].starts_with("\r\n") {
            2
        } else {
            1
        };
        self.rest = &self.rest[idx + terminator..];
        Some(line)
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
