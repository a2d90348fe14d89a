//! One-shot board queries rendered as text or JSON.

use anyhow::Result;
use perfect_tictactoe::{Board, Searcher, evaluate};
use tracing::instrument;

use crate::EngineConfig;

/// Renders the engine's choice for `board`.
///
/// Text output is `"<index> (<label>)"`, or `"none"` when the board
/// has no empty square. JSON output is the full search report.
///
/// # Errors
///
/// Returns an error if `board` is not valid board notation.
#[instrument]
pub fn best_move(board: &str, json: bool) -> Result<String> {
    let board: Board = board.parse()?;
    let report = Searcher::default().search(&board);

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(match report.best_move() {
        Some(pos) => format!("{} ({})", pos.to_index(), pos),
        None => "none".to_string(),
    })
}

/// Renders the outcome of `board`.
///
/// # Errors
///
/// Returns an error if `board` is not valid board notation.
#[instrument]
pub fn outcome(board: &str, json: bool) -> Result<String> {
    let board: Board = board.parse()?;
    let outcome = evaluate(&board);

    if json {
        return Ok(serde_json::to_string_pretty(&outcome)?);
    }
    Ok(outcome.to_string())
}

/// Renders the exact score of every empty square as JSON.
///
/// # Errors
///
/// Returns an error if `board` is not valid board notation.
#[instrument(skip(config))]
pub fn analysis(board: &str, config: &EngineConfig) -> Result<String> {
    let board: Board = board.parse()?;
    let analysis = Searcher::new(*config.search()).analyze(&board);
    Ok(serde_json::to_string_pretty(&analysis)?)
}
