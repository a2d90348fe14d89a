//! Alpha-beta pruned minimax.
//!
//! Returns the same value as plain minimax whenever the true score lies
//! inside `(alpha, beta)`. Outside the window the result is a bound on
//! the correct side of it, which is all the root needs to rank moves.

use super::scoring::Score;
use super::searcher::SearchStats;
use crate::{Board, Player, evaluate};

/// Scores `board` like [`score`](super::score), pruning lines that
/// cannot change the result.
pub fn score_pruned(board: &Board, maximizing: bool) -> Score {
    alpha_beta(
        *board,
        maximizing,
        Score::XWins,
        Score::OWins,
        &mut SearchStats::default(),
    )
}

pub(crate) fn alpha_beta(
    board: Board,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;
    if let Some(terminal) = Score::from_outcome(&evaluate(&board)) {
        stats.terminals += 1;
        return terminal;
    }

    if maximizing {
        let mut value = Score::XWins;
        for pos in board.empty_positions() {
            let child = alpha_beta(board.with_mark(pos, Player::O), false, alpha, beta, stats);
            value = value.max(child);
            if value >= beta {
                break;
            }
            alpha = alpha.max(value);
        }
        value
    } else {
        let mut value = Score::OWins;
        for pos in board.empty_positions() {
            let child = alpha_beta(board.with_mark(pos, Player::X), true, alpha, beta, stats);
            value = value.min(child);
            if value <= alpha {
                break;
            }
            beta = beta.min(value);
        }
        value
    }
}
