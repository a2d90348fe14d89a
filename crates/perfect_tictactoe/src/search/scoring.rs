//! Absolute game score.

use crate::{Outcome, Player};
use serde::{Deserialize, Serialize};

/// Value of a position under perfect play, from O's point of view.
///
/// Ordered so that `XWins < Draw < OWins`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Score {
    /// X wins.
    #[display("-1")]
    XWins = -1,
    /// Neither side wins.
    #[display("0")]
    Draw = 0,
    /// O wins.
    #[display("+1")]
    OWins = 1,
}

impl Score {
    /// The score as an integer in `{-1, 0, 1}`.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Score of a terminal outcome, or `None` while the game is in progress.
    pub fn from_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Win {
                player: Player::O, ..
            } => Some(Score::OWins),
            Outcome::Win {
                player: Player::X, ..
            } => Some(Score::XWins),
            Outcome::Draw => Some(Score::Draw),
        }
    }
}
