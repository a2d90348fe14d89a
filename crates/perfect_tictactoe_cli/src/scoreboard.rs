//! In-memory tally of finished games.

use derive_getters::Getters;
use derive_new::new;
use perfect_tictactoe::{Outcome, Player};
use serde::Serialize;

/// Results of the games played in this process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, new)]
pub struct Scoreboard {
    /// Games won by the human (X).
    #[new(default)]
    human_wins: u32,
    /// Games won by the computer (O).
    #[new(default)]
    computer_wins: u32,
    /// Drawn games.
    #[new(default)]
    draws: u32,
}

impl Scoreboard {
    /// Records a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(Player::X) => self.human_wins += 1,
            Some(Player::O) => self.computer_wins += 1,
            None if *outcome == Outcome::Draw => self.draws += 1,
            None => {}
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {}  Computer: {}  Draws: {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}
