//! Tic-tac-toe - terminal driver
//!
//! Plays against the minimax engine, analyzes positions and runs self-play.

#![warn(missing_docs)]

mod analyze;
mod cli;
mod config;
mod driver;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::DriverConfig;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DriverConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        computer: None,
        hints: false,
    }) {
        Command::Play { computer, hints } => run_play(config.with_overrides(computer, hints)),
        Command::Analyze {
            board,
            player,
            json,
        } => {
            let analysis = analyze::analyze(board, player);
            analyze::write_analysis(&mut io::stdout().lock(), &analysis, json)
        }
        Command::Selfplay => analyze::selfplay(&mut io::stdout().lock()).map(|_| ()),
    }
}

/// Runs one interactive game on stdin/stdout.
#[instrument(skip_all, fields(human = %config.human()))]
fn run_play(config: DriverConfig) -> Result<()> {
    info!("Starting interactive game");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut driver = driver::Driver::new(stdin, stdout, *config.human(), *config.hints());

    match driver.run()? {
        Some(outcome) => info!(%outcome, "Session finished"),
        None => info!("Session abandoned"),
    }
    Ok(())
}
