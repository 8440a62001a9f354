mod analyzer;
mod statistics;

pub use analyzer::{Analyzer, FileOutcome, analyze_file};
pub use statistics::{FileStatistics, LanguageStats, ProjectStatistics, SkipCounts, SortKey};
