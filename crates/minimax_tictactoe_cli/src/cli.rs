//! Command-line interface for the tic-tac-toe driver.

use clap::{Parser, Subcommand};
use minimax_tictactoe::{Board, Player};

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Mark the computer plays (X always moves first)
        #[arg(long)]
        computer: Option<Player>,

        /// Show the minimax score of every legal move before each turn.
        /// Only turns hints on; `hints = true` in the config file cannot be
        /// switched off from the command line
        #[arg(long)]
        hints: bool,
    },

    /// Score every legal move of a position
    Analyze {
        /// Board as 9 cells, e.g. "X.O/.X./..." ('.' marks an empty cell)
        board: Board,

        /// Side to move
        #[arg(long, default_value = "O")]
        player: Player,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides from the empty board
    Selfplay,
}
