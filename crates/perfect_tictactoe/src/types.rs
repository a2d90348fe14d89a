//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X, the human side (minimizing).
    X,
    /// Player O, the computer side (maximizing).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the square with X and O exchanged.
    pub fn swapped(self) -> Self {
        match self {
            Square::Empty => Square::Empty,
            Square::Occupied(player) => Square::Occupied(player.opponent()),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Errors raised when a board is built from malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Input did not describe exactly nine cells.
    #[display("Board must have 9 cells, got {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// Input contained a character that is not a cell or separator.
    #[display("Invalid cell {:?} at offset {}", cell, offset)]
    InvalidCell {
        /// The offending character.
        cell: char,
        /// Byte offset of the character in the input.
        offset: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so a cell's index is
/// `row * 3 + col`. The board is `Copy`; search explores positions by
/// value rather than by mutating and restoring a shared board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from a slice of exactly nine squares.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongLength`] if the slice does not hold nine squares.
    pub fn from_squares(squares: &[Square]) -> Result<Self, BoardError> {
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardError::WrongLength(squares.len()))?;
        Ok(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player` marked at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Iterates over the empty positions in index order (0 → 8).
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Returns the board with every X replaced by O and vice versa.
    pub fn swap_marks(&self) -> Self {
        Self {
            squares: self.squares.map(Square::swapped),
        }
    }

    /// Compact nine-character notation, e.g. `XX.O.....`.
    pub fn notation(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses board notation.
    ///
    /// Cells are `X`, `O` (either case) and `.`, `_` or `-` for empty.
    /// `/`, `|` and whitespace separate rows and are skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for (offset, cell) in s.char_indices() {
            let square = match cell {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_ascii_whitespace() => continue,
                cell => return Err(BoardError::InvalidCell { cell, offset }),
            };
            squares.push(square);
        }
        Self::from_squares(&squares)
    }
}
