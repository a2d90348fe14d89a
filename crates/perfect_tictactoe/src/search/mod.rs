//! Adversarial search for the computer's move.
//!
//! O maximizes and X minimizes an absolute score: `+1` when O has
//! won, `-1` when X has won, `0` for a draw. The game tree from any
//! position is small enough to search exhaustively, so every score is
//! exact and the chosen move is optimal.

mod alpha_beta;
mod minimax;
mod scoring;
mod searcher;

pub use alpha_beta::score_pruned;
pub use minimax::score;
pub use scoring::Score;
pub use searcher::{
    Analysis, MoveScore, SearchConfig, SearchError, SearchReport, SearchStats, Searcher,
};

use crate::{Board, Position};

/// Returns the optimal move for O, or `None` if no square is empty.
///
/// Ties keep the lowest-indexed move. The board should be in progress;
/// on a decided board the result is still some empty square but carries
/// no meaning. Use [`Searcher::choose_move`] for a checked variant.
pub fn best_move(board: &Board) -> Option<Position> {
    Searcher::default().best_move(board)
}
