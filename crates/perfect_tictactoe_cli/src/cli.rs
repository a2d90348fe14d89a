//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Perfect Tic-Tac-Toe - play against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to engine config (TOML). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Let the computer open the game
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the computer's best move for a board
    BestMove {
        /// Board notation, e.g. "XX./O../..."
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the outcome of a board
    Evaluate {
        /// Board notation, e.g. "XXX/OO./..."
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the exact score of every legal computer move (JSON)
    Analyze {
        /// Board notation
        board: String,

        /// Path to engine config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
