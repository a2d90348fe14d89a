//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so the
//! search engine and any front-end share a single terminal-state test.

pub mod draw;
pub mod line;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use line::{Line, LineKind};
pub use outcome::{Outcome, evaluate};
pub use win::winning_line;
