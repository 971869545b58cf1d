//! Development tasks for the ladder workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, Resolve, Validate};

/// Development tasks for the ladder workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for tier ladders", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print every ladder, alias and relation of a registry
    Inspect(Inspect),

    /// Resolve one tier delta against a scratch battler
    Resolve(Resolve),

    /// Check that a ladder table file builds a registry
    Validate(Validate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for LADDER_COMBINE_BUFFS and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Inspect(cmd) => cmd.execute(),
        Command::Resolve(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
    }
}
