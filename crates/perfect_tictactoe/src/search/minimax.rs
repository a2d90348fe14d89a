//! Plain exhaustive minimax.

use super::scoring::Score;
use super::searcher::SearchStats;
use crate::{Board, Player, evaluate};

/// Scores `board` assuming perfect play from both sides.
///
/// `maximizing` is true when O is to move. The result is absolute,
/// not relative to the side to move.
pub fn score(board: &Board, maximizing: bool) -> Score {
    minimax(*board, maximizing, &mut SearchStats::default())
}

pub(crate) fn minimax(board: Board, maximizing: bool, stats: &mut SearchStats) -> Score {
    stats.nodes += 1;
    if let Some(terminal) = Score::from_outcome(&evaluate(&board)) {
        stats.terminals += 1;
        return terminal;
    }

    let mover = if maximizing { Player::O } else { Player::X };
    let children = board
        .empty_positions()
        .map(|pos| minimax(board.with_mark(pos, mover), !maximizing, stats));
    let best = if maximizing {
        children.max()
    } else {
        children.min()
    };
    // A full board always evaluates as terminal.
    best.unwrap_or(Score::Draw)
}
