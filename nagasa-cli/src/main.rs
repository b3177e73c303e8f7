//! nagasa command-line entry point

use clap::Parser;
use nagasa_cli::commands::Commands;

/// Extractive summaries from the longest sentences of a text
#[derive(Debug, Parser)]
#[command(name = "nagasa", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
