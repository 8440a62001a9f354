use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::counter::LineStats;
use crate::error::{NxlcError, Result};

/// Name of the per-language expectations file.
pub const EXPECTED_FILE: &str = "expected.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    Simple,
    Complex,
    EdgeCases,
}

impl FixtureKind {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Complex, Self::EdgeCases];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
            Self::EdgeCases => "edge_cases",
        }
    }

    /// File name of this fixture for a language whose extension is `ext` (with dot).
    #[must_use]
    pub fn file_name(self, ext: &str) -> String {
        format!("{}{ext}", self.as_str())
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixtureKind {
    type Err = NxlcError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "simple" => Ok(Self::Simple),
            "complex" => Ok(Self::Complex),
            "edge_cases" | "edge" => Ok(Self::EdgeCases),
            _ => Err(NxlcError::Config(format!("Unknown fixture kind: {s}"))),
        }
    }
}

/// Line counts as stored in `expected.json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCount {
    pub total: usize,
    pub code: usize,
    pub comments: usize,
    pub blank: usize,
}

impl LineCount {
    #[must_use]
    pub const fn new(total: usize, code: usize, comments: usize, blank: usize) -> Self {
        Self {
            total,
            code,
            comments,
            blank,
        }
    }

    /// Whether `other` agrees with these counts.
    ///
    /// A tolerance of 0 demands equality. Otherwise every field may differ
    /// by at most `tolerance` relative to the larger of the two values.
    #[must_use]
    pub fn matches(&self, other: &Self, tolerance: f64) -> bool {
        if tolerance <= 0.0 {
            return self == other;
        }
        within(self.total, other.total, tolerance)
            && within(self.code, other.code, tolerance)
            && within(self.comments, other.comments, tolerance)
            && within(self.blank, other.blank, tolerance)
    }
}

#[allow(clippy::cast_precision_loss)] // Fixture line counts are small
fn within(a: usize, b: usize, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    a.abs_diff(b) as f64 / a.max(b) as f64 <= tolerance
}

impl From<LineStats> for LineCount {
    fn from(stats: LineStats) -> Self {
        Self {
            total: stats.total,
            code: stats.code,
            comments: stats.comment,
            blank: stats.blank,
        }
    }
}

impl fmt::Display for LineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={} code={} comments={} blank={}",
            self.total, self.code, self.comments, self.blank
        )
    }
}

/// One fixture entry of `expected.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedEntry {
    pub filename: String,
    #[serde(flatten)]
    pub counts: LineCount,
}

/// The `expected.json` document. Unknown keys survive a read/write cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedFile {
    pub language: String,
    pub category: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple: Option<ExpectedEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex: Option<ExpectedEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_cases: Option<ExpectedEntry>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExpectedFile {
    #[must_use]
    pub fn new(language: &str, category: &str, extensions: Vec<String>) -> Self {
        Self {
            language: language.to_string(),
            category: category.to_string(),
            extensions,
            simple: None,
            complex: None,
            edge_cases: None,
            extra: serde_json::Map::new(),
        }
    }

    #[must_use]
    pub const fn entry(&self, kind: FixtureKind) -> Option<&ExpectedEntry> {
        match kind {
            FixtureKind::Simple => self.simple.as_ref(),
            FixtureKind::Complex => self.complex.as_ref(),
            FixtureKind::EdgeCases => self.edge_cases.as_ref(),
        }
    }

    pub const fn entry_mut(&mut self, kind: FixtureKind) -> Option<&mut ExpectedEntry> {
        match kind {
            FixtureKind::Simple => self.simple.as_mut(),
            FixtureKind::Complex => self.complex.as_mut(),
            FixtureKind::EdgeCases => self.edge_cases.as_mut(),
        }
    }

    pub fn set_entry(&mut self, kind: FixtureKind, entry: ExpectedEntry) {
        let slot = match kind {
            FixtureKind::Simple => &mut self.simple,
            FixtureKind::Complex => &mut self.complex,
            FixtureKind::EdgeCases => &mut self.edge_cases,
        };
        *slot = Some(entry);
    }

    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid document.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| NxlcError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| NxlcError::Fixture {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Writes pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        std::fs::write(path, json).map_err(|source| NxlcError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A fixture file together with the counts it is expected to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub language: String,
    /// Name of the category directory holding the fixture.
    pub category: String,
    pub kind: FixtureKind,
    pub path: PathBuf,
    pub expected: LineCount,
}

impl Fixture {
    /// Checks that the fixture file exists and is a regular file.
    ///
    /// # Errors
    /// Returns a description of the problem.
    pub fn check_file(&self) -> std::result::Result<(), String> {
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(format!("Not a file: {}", self.path.display())),
            Err(_) => Err(format!("File does not exist: {}", self.path.display())),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
