//! Tricky - terminal game entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tricky_game::{Console, Session};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout carries the board, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli
        .resolve_config()
        .context("Failed to load configuration")?;
    debug!(?config, "Configuration resolved");

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let mut session = Session::new(console, config);
    if let Some(path) = &cli.record {
        session = session.with_record(path);
    }

    let scoreboard = session.run().context("Game session failed")?;
    info!(games = scoreboard.games(), "Goodbye");
    Ok(())
}
