//! Diagnostic logging for the binary.
//!
//! Library code only emits `tracing` events. The binary installs a `fmt`
//! subscriber writing to stderr, so reports on stdout stay clean.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Filter directives here replace the verbosity flags entirely.
pub const ENV_LOG: &str = "NXLC_LOG";

/// Level for `-q` / `-v` counts: quiet is errors only, the default is warnings.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `NXLC_LOG` when set and non-empty, otherwise the verbosity level.
#[must_use]
pub fn build_filter(directives: Option<&str>, verbose: u8, quiet: bool) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(level_for(verbose, quiet).into());
    builder.parse_lossy(directives.map_or("", str::trim))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbose: u8, quiet: bool) {
    let directives = std::env::var(ENV_LOG).ok();
    let filter = build_filter(directives.as_deref(), verbose, quiet);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
