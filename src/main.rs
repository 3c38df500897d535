//! Tic-tac-toe - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::{TuiConfig, parse_move, replay, status_line, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay { moves, no_hints } => run_replay(moves, !no_hints),
    }
}

/// Runs the interactive game, logging to the configured file.
fn run_play(config_path: std::path::PathBuf) -> Result<()> {
    let config = TuiConfig::load_or_default(&config_path)?;

    // Log to a file so output does not corrupt the terminal UI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config = %config_path.display(), "Starting interactive game");
    tui::run_tui(&config)
}

/// Replays a move list and prints the final board.
fn run_replay(moves: Vec<String>, hints: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let moves = moves
        .iter()
        .map(|m| parse_move(m))
        .collect::<Result<Vec<_>, _>>()?;

    let result = replay(&moves);
    for (ordinal, (x, y)) in &result.rejected {
        eprintln!("move {} at ({}, {}) ignored", ordinal, x, y);
    }

    println!("{}", result.state.board().display(hints));
    println!();
    println!("{}", status_line(&result.state));
    Ok(())
}
