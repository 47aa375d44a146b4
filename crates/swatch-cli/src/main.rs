//! Swatch CLI.

use clap::Parser;
use tracing::info;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command};
use crate::commands::{list_recipes, run};
use crate::logging::{init_logging, LogConfig};

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    let result = match &cli.command {
        Command::Run(args) => run(args).map(|summary| {
            info!(commands = summary.commands, exports = summary.exports, "run complete");
        }),
        Command::Recipes(args) => list_recipes(args),
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
