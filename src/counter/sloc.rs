use std::io::BufRead;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::language::Language;

use super::{LineKind, LineScanner, split_lines, strip_bom};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    pub const fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
        }
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

pub struct SlocCounter<'a> {
    language: &'a Language,
}

impl<'a> SlocCounter<'a> {
    #[must_use]
    pub const fn new(language: &'a Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut scanner = LineScanner::new(self.language);
        let mut stats = LineStats::new();
        for line in split_lines(strip_bom(source)) {
            stats.record(scanner.classify(line));
        }
        stats
    }

    /// Per-line classification of `source`, in order.
    #[must_use]
    pub fn classify_lines(&self, source: &str) -> Vec<LineKind> {
        let mut scanner = LineScanner::new(self.language);
        split_lines(strip_bom(source))
            .map(|line| scanner.classify(line))
            .collect()
    }

    /// Count lines from a buffered reader without loading the whole file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<LineStats> {
        let mut scanner = LineScanner::new(self.language);
        let mut stats = LineStats::new();
        let mut buf = Vec::new();
        let mut first_chunk = true;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Each chunk ends at `\n` or EOF, so only lone `\r` can split it further.
            let chunk = String::from_utf8_lossy(&buf);
            let text: &str = if first_chunk {
                strip_bom(&chunk)
            } else {
                &chunk
            };
            first_chunk = false;

            for line in split_lines(text) {
                stats.record(scanner.classify(line));
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
#[path = "sloc_tests/mod.rs"]
mod tests;
