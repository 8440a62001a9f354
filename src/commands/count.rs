use std::path::PathBuf;

use crate::analysis::{Analyzer, ProjectStatistics, SortKey};
use crate::cli::{Cli, CountArgs};
use crate::config::Config;
use crate::output::{
    ColorMode, OutputFormat, StatsFormatter, StatsJsonFormatter, StatsTextFormatter,
};
use crate::scanner::{DirectoryScanner, GlobFilter, ScanOptions};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{build_registry, color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    match run_count_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error_type = e.error_type(), "count failed");
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Counts every path and writes the report.
///
/// # Errors
/// Returns an error if the config is invalid, a path does not exist, or the
/// report cannot be written.
pub fn run_count_impl(args: &CountArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let registry = build_registry(&config);

    let mut exclude = config.scanner.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());
    let filter = GlobFilter::new(Vec::new(), &exclude)?;
    let scanner = DirectoryScanner::with_options(filter, scan_options(args, &config));

    let stats = Analyzer::new(scanner, &registry)
        .quiet(cli.quiet)
        .run(&args.paths)?
        .with_sort(resolve_sort(args, &config)?);

    let color_mode = if args.no_color || args.output.is_some() {
        ColorMode::Never
    } else {
        color_choice_to_mode(cli.color)
    };
    let content = format_stats(
        resolve_format(args, &config)?,
        color_mode,
        args.by_file,
        project_root(&args.paths),
        &stats,
    )?;
    write_output(args.output.as_deref(), &content)
}

/// Command-line switches can only widen what the config allows.
#[must_use]
pub const fn scan_options(args: &CountArgs, config: &Config) -> ScanOptions {
    ScanOptions {
        gitignore: config.scanner.gitignore && !args.no_git,
        hidden: config.scanner.hidden || args.hidden,
        follow_links: config.scanner.follow_links || args.follow_links,
    }
}

/// `--format`, else `[output] format`, else text.
///
/// # Errors
/// Returns an error if the config names an unknown format.
pub fn resolve_format(args: &CountArgs, config: &Config) -> Result<OutputFormat> {
    match (args.format, config.output.format.as_deref()) {
        (Some(format), _) => Ok(format),
        (None, Some(name)) => name.parse(),
        (None, None) => Ok(OutputFormat::default()),
    }
}

/// `--sort`, else `[output] sort`, else code lines.
///
/// # Errors
/// Returns an error if the config names an unknown sort key.
pub fn resolve_sort(args: &CountArgs, config: &Config) -> Result<SortKey> {
    match (args.sort, config.output.sort.as_deref()) {
        (Some(sort), _) => Ok(sort),
        (None, Some(name)) => name.parse(),
        (None, None) => Ok(SortKey::default()),
    }
}

/// Paths in the report are shown relative to a single directory root.
#[must_use]
pub fn project_root(paths: &[PathBuf]) -> Option<PathBuf> {
    match paths {
        [root] if root.is_dir() => Some(root.clone()),
        _ => None,
    }
}

/// Renders `stats`, always ending in a newline.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_stats(
    format: OutputFormat,
    color_mode: ColorMode,
    by_file: bool,
    root: Option<PathBuf>,
    stats: &ProjectStatistics,
) -> Result<String> {
    let mut output = match format {
        OutputFormat::Text => StatsTextFormatter::new(color_mode)
            .with_by_file(by_file)
            .with_project_root(root)
            .format(stats)?,
        OutputFormat::Json => StatsJsonFormatter::new()
            .with_by_file(by_file)
            .with_project_root(root)
            .format(stats)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
