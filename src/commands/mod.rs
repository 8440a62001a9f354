pub mod context;
pub mod count;
pub mod fixtures;
pub mod languages;

pub use count::{run_count, run_count_impl};
pub use fixtures::{run_fixtures, run_fixtures_impl};
pub use languages::{run_languages, run_languages_impl};

use crate::EXIT_CONFIG_ERROR;
use crate::cli::{Cli, Commands};

/// Runs the parsed command line and returns the process exit code.
///
/// Count options given before a subcommand are rejected rather than ignored.
#[must_use]
pub fn run(cli: &Cli) -> i32 {
    if let Some(command) = &cli.command
        && cli.count.has_options()
    {
        eprintln!(
            "Error: count options and paths cannot be combined with the '{}' subcommand",
            command.name()
        );
        return EXIT_CONFIG_ERROR;
    }

    match &cli.command {
        None => run_count(&cli.count, cli),
        Some(Commands::Languages(args)) => run_languages(args, cli),
        Some(Commands::Fixtures(args)) => run_fixtures(args, cli),
    }
}
