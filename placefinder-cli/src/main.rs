//! placefinder command-line entry point

use anyhow::Result;
use clap::Parser;
use placefinder_cli::commands::Commands;

/// Extract candidate place names from text
#[derive(Debug, Parser)]
#[command(name = "placefinder", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
