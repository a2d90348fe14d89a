//! Typestate game driver for human-versus-computer play.
//!
//! The engine itself never enforces turn order or rejects occupied
//! squares. This module does, with the game phase encoded in the type
//! parameter so a finished game cannot accept moves.

use derive_more::{Display, Error};
use perfect_tictactoe::{Board, Line, Outcome, Player, Position, SearchError, Searcher, evaluate};
use tracing::{debug, instrument};

/// Typestate: game is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InProgress {
    to_move: Player,
}

/// Typestate: game ended in a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Won {
    player: Player,
    line: Line,
}

/// Typestate: game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw;

/// Game with its phase encoded in `S`.
///
/// - `Game<InProgress>` accepts moves
/// - `Game<Won>` knows its winner and winning line
/// - `Game<Draw>` only exposes the final board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<S> {
    board: Board,
    history: Vec<Position>,
    phase: S,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Game continues with the other player.
    InProgress(Game<InProgress>),
    /// The mark completed a line.
    Won(Game<Won>),
    /// The mark filled the board.
    Draw(Game<Draw>),
}

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The computer was asked to move while X is to play.
    #[display("It is not the computer's turn")]
    NotComputersTurn,

    /// The engine found nothing to play.
    #[display("Computer could not move: {}", _0)]
    Search(SearchError),
}

// ─────────────────────────────────────────────────────────────
//  InProgress - the only phase that accepts moves
// ─────────────────────────────────────────────────────────────

impl Game<InProgress> {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            phase: InProgress { to_move: first },
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.phase.to_move
    }

    /// Places the current player's mark, consuming the game.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] if the position is taken.
    #[instrument(skip(self), fields(player = %self.phase.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, PlaceError> {
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }

        let player = self.phase.to_move;
        self.board = self.board.with_mark(pos, player);
        self.history.push(pos);

        let transition = match evaluate(&self.board) {
            Outcome::Win { player, line } => GameTransition::Won(Game {
                board: self.board,
                history: self.history,
                phase: Won { player, line },
            }),
            Outcome::Draw => GameTransition::Draw(Game {
                board: self.board,
                history: self.history,
                phase: Draw,
            }),
            Outcome::InProgress => GameTransition::InProgress(Game {
                board: self.board,
                history: self.history,
                phase: InProgress {
                    to_move: player.opponent(),
                },
            }),
        };
        debug!(outcome = %transition.outcome(), "Mark placed");
        Ok(transition)
    }

    /// Lets the engine play O's move.
    ///
    /// Returns the chosen position alongside the transition.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::NotComputersTurn`] when X is to move.
    #[instrument(skip(self, searcher))]
    pub fn play_computer(
        self,
        searcher: &Searcher,
    ) -> Result<(Position, GameTransition), PlaceError> {
        if self.phase.to_move != Player::O {
            return Err(PlaceError::NotComputersTurn);
        }
        let pos = searcher
            .choose_move(&self.board)
            .map_err(PlaceError::Search)?;
        debug!(position = %pos, "Computer chose move");
        Ok((pos, self.place(pos)?))
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winner of the game.
    pub fn winner(&self) -> Player {
        self.phase.player
    }

    /// Returns the completed line.
    pub fn line(&self) -> Line {
        self.phase.line
    }
}

impl GameTransition {
    /// The board after the transition.
    pub fn board(&self) -> &Board {
        match self {
            GameTransition::InProgress(game) => game.board(),
            GameTransition::Won(game) => game.board(),
            GameTransition::Draw(game) => game.board(),
        }
    }

    /// The outcome the transition represents.
    pub fn outcome(&self) -> Outcome {
        match self {
            GameTransition::InProgress(_) => Outcome::InProgress,
            GameTransition::Won(game) => Outcome::Win {
                player: game.winner(),
                line: game.line(),
            },
            GameTransition::Draw(_) => Outcome::Draw,
        }
    }
}
