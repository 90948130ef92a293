//! vitn command-line entry point

use anyhow::Result;
use clap::{Parser, Subcommand};

use vitn_cli::commands::NormalizeArgs;

/// Vietnamese inverse text normalization
#[derive(Debug, Parser)]
#[command(name = "vitn", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert spoken-style text into canonical written form
    Normalize(NormalizeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Normalize(args) => args.execute(),
    }
}
