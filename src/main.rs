use clap::Parser;

use nxlc::cli::Cli;
use nxlc::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = commands::run(&cli);
    std::process::exit(exit_code);
}
