use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use crate::analysis::SortKey;
use crate::language::Category;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "nxlc")]
#[command(author, version, about = "Count code, comment and blank lines across 100+ languages")]
#[command(long_about = "Counts code, comment and blank lines per language.\n\n\
    Run without a subcommand to count the given paths (default: current directory).\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Fixture validation errors, verification failures or performance regressions\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub count: CountArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported languages
    Languages(LanguagesArgs),

    /// Generate, validate, calibrate and verify the fixture corpus
    Fixtures(FixturesArgs),
}

#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountArgs {
    /// Paths to count (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Ignore .gitignore, .ignore and git exclude files
    #[arg(long)]
    pub no_git: bool,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_links: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Language table order [possible values: code, total, files, name]
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// List every counted file before the language table
    #[arg(long)]
    pub by_file: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output (same as --color never)
    #[arg(long)]
    pub no_color: bool,
}

impl Commands {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Languages(_) => "languages",
            Self::Fixtures(_) => "fixtures",
        }
    }
}

impl CountArgs {
    /// True when any count-only option or path was given.
    #[must_use]
    pub fn has_options(&self) -> bool {
        let default_paths = matches!(self.paths.as_slice(), [p] if p.as_os_str() == ".");
        !default_paths
            || self.no_git
            || self.hidden
            || self.follow_links
            || !self.exclude.is_empty()
            || self.format.is_some()
            || self.sort.is_some()
            || self.by_file
            || self.output.is_some()
            || self.no_color
    }
}

#[derive(Args, Debug)]
pub struct LanguagesArgs {
    /// Only list languages in this category
    #[arg(long)]
    pub category: Option<Category>,

    /// Output format [possible values: text, json]
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct FixturesArgs {
    /// Fixture root directory (overrides config and NXLC_FIXTURE_DIR)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub action: FixturesAction,
}

#[derive(Subcommand, Debug)]
pub enum FixturesAction {
    /// Write fixture files and expected.json for languages
    Generate(GenerateArgs),

    /// Check the fixture tree for structural and count problems
    Validate(ValidateArgs),

    /// Rewrite expected counts from the current counter output
    Calibrate(CalibrateArgs),

    /// Count every fixture and compare against expected counts
    Verify(VerifyArgs),

    /// Compare a verification report against a performance baseline
    Perf(PerfArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["language", "category", "all"])))]
pub struct GenerateArgs {
    /// Generate fixtures for one language
    #[arg(long)]
    pub language: Option<String>,

    /// Generate fixtures for every language in a category
    #[arg(long)]
    pub category: Option<Category>,

    /// Generate fixtures for every language
    #[arg(long)]
    pub all: bool,

    /// Overwrite existing fixtures
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Run only the named validators (structure, consistency, completeness,
    /// correctness, performance)
    #[arg(long = "validator")]
    pub validators: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").args(["language", "category"])))]
pub struct CalibrateArgs {
    /// Calibrate one language
    #[arg(long)]
    pub language: Option<String>,

    /// Calibrate every language in a category
    #[arg(long)]
    pub category: Option<Category>,

    /// Show the changes without writing them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Only verify this language
    #[arg(long)]
    pub language: Option<String>,

    /// Only verify this category
    #[arg(long)]
    pub category: Option<Category>,

    /// Worker threads (overrides config and NXLC_WORKERS)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Run fixtures one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Write a JSON report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PerfArgs {
    /// JSON report written by `fixtures verify --report`
    #[arg(long)]
    pub results: PathBuf,

    /// Baseline file
    #[arg(long, default_value = "performance_baseline.json")]
    pub baseline: PathBuf,

    /// Allowed slowdown in percent (a baseline threshold takes precedence)
    #[arg(long, default_value_t = 20.0)]
    pub threshold: f64,

    /// Store the current results as the new baseline
    #[arg(long)]
    pub update_baseline: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
