//! Perfect Tic-Tac-Toe - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe_cli::{EngineConfig, report, terminal};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            computer_first,
        } => run_play(config, computer_first),
        Command::BestMove { board, json } => run_best_move(&board, json),
        Command::Evaluate { board, json } => run_evaluate(&board, json),
        Command::Analyze { board, config } => run_analyze(&board, config),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::from_file(path)?),
        None => Ok(EngineConfig::default()),
    }
}

/// Run the interactive terminal game
#[instrument]
fn run_play(config: Option<PathBuf>, computer_first: bool) -> Result<()> {
    let mut config = load_config(config)?;
    if computer_first {
        config = config.with_human_first(false);
    }
    info!(?config, "Starting terminal session");

    let stdin = std::io::stdin();
    let scoreboard = terminal::run_session(stdin.lock(), std::io::stdout(), &config)?;
    info!(games = scoreboard.games(), "Session ended");
    Ok(())
}

/// Print the best move for a board
fn run_best_move(board: &str, json: bool) -> Result<()> {
    println!("{}", report::best_move(board, json)?);
    Ok(())
}

/// Print the outcome of a board
fn run_evaluate(board: &str, json: bool) -> Result<()> {
    println!("{}", report::outcome(board, json)?);
    Ok(())
}

/// Print per-move scores for a board
fn run_analyze(board: &str, config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    println!("{}", report::analysis(board, &config)?);
    Ok(())
}
