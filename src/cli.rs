//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Path to the TOML config file (optional; defaults apply if missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,
    },

    /// Apply moves to a fresh game and print the result
    Replay {
        /// Moves as `x,y` coordinates or square numbers 1-9, X first
        #[arg(required = true)]
        moves: Vec<String>,

        /// Hide square numbers on empty cells
        #[arg(long)]
        no_hints: bool,
    },
}
