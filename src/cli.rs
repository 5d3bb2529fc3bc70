//! CLI argument parsing for tally.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tally",
    about = "An in-memory list manager with completion tracking",
    version,
    after_help = "Logs are written to: ~/.local/share/tally/logs/tally.log"
)]
pub struct Cli {
    /// Print JSON instead of colored text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Seed a store with sample items, complete one and print the result
    Demo,

    /// Execute a YAML or JSON script of operations against a fresh store
    Run {
        /// Script file (.yaml, .yml or .json)
        script: PathBuf,

        /// Keep going after an operation reports a missing item
        #[arg(short, long)]
        keep_going: bool,
    },
}
