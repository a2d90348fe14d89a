//! Terminal-state evaluation.

use super::draw::is_full;
use super::line::Line;
use super::win::winning_line;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// `player` holds every square of `line`.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The board is full and no line is complete.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The same outcome with X and O exchanged.
    pub fn swapped(self) -> Self {
        match self {
            Outcome::Win { player, line } => Outcome::Win {
                player: player.opponent(),
                line,
            },
            other => other,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win { player, line } => write!(f, "{player} wins ({line})"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Evaluates any board, reachable or not.
///
/// A complete line wins (first in [`Line::ALL`] order); otherwise a
/// full board is a draw; otherwise the game is in progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
