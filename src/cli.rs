//! Command line front end for argus-utils

mod args;
mod commands;

pub use args::Cli;
pub use commands::Commands;

use crate::error::Result;
use clap::Parser;

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.command.run(&cli)
}
