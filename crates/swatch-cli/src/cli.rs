//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "swatch",
    version,
    about = "Swatch - apply design-system recipes to a node tree",
    long_about = "Drive the Swatch recipe engine over a JSON node tree.\n\n\
                  Commands are read as JSON lines in the same shape the plugin UI sends,\n\
                  applied in order, and the painted tree, UI state, and exports are written out."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a command stream to a node tree.
    Run(RunArgs),

    /// List the built-in recipes evaluated against the default parameters.
    Recipes(RecipesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Node tree snapshot (JSON).
    #[arg(long = "tree", value_name = "PATH")]
    pub tree: PathBuf,

    /// Commands, one JSON message per line. Blank lines and lines starting
    /// with `#` are skipped.
    #[arg(long = "commands", value_name = "PATH")]
    pub commands: Option<PathBuf>,

    /// Node ids to select before the first command.
    #[arg(long = "select", value_name = "ID", value_delimiter = ',')]
    pub select: Vec<String>,

    /// Category and alias tables for export (JSON).
    #[arg(long = "export-config", value_name = "PATH")]
    pub export_config: Option<PathBuf>,

    /// Design-system parameters layered over the built-in defaults (JSON object).
    #[arg(long = "defaults", value_name = "PATH")]
    pub defaults: Option<PathBuf>,

    /// Directory for the painted tree, the last UI state, and exports.
    /// Prints the UI state to stdout when omitted.
    #[arg(long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RecipesArgs {
    /// Design-system parameters layered over the built-in defaults (JSON object).
    #[arg(long = "defaults", value_name = "PATH")]
    pub defaults: Option<PathBuf>,
}
