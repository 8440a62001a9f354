mod json;
mod path;
mod progress;
mod text;

pub use json::StatsJsonFormatter;
pub use path::{display_path, normalize_separators};
pub use progress::ScanProgress;
pub use text::{ColorMode, StatsTextFormatter};

use crate::analysis::ProjectStatistics;
use crate::error::{NxlcError, Result};

/// Trait for rendering project statistics.
pub trait StatsFormatter {
    /// Format the project statistics into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, stats: &ProjectStatistics) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = NxlcError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(NxlcError::Config(format!("Unknown output format: {s}"))),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
