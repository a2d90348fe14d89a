//! Perfect-play tic-tac-toe engine.
//!
//! Two pieces make up the engine:
//!
//! - **Rules**: the board, the eight winning lines, and [`evaluate`],
//!   which decides whether a board is won, drawn, or still in progress.
//! - **Search**: [`best_move`] and [`Searcher`], which pick the
//!   computer's (O's) move by exhaustive minimax over every continuation.
//!
//! The engine keeps no state between calls. Callers own the board,
//! enforce turn order, and reject moves onto occupied squares.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Outcome, Position, best_move, evaluate};
//!
//! let board: Board = "XX./O../...".parse()?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! assert_eq!(best_move(&board), Some(Position::TopRight));
//! # Ok::<(), perfect_tictactoe::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
pub mod rules;
pub mod search;
mod types;

pub use position::Position;
pub use rules::{Line, LineKind, Outcome, evaluate};
pub use search::{
    Analysis, MoveScore, Score, SearchConfig, SearchError, SearchReport, SearchStats, Searcher,
    best_move, score, score_pruned,
};
pub use types::{Board, BoardError, Player, Square};
