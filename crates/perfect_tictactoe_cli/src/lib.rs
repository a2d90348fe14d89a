//! Terminal front-end for the perfect tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML engine settings ([`EngineConfig`])
//! - **Game**: typestate driver enforcing turns and legal squares ([`Game`])
//! - **Terminal**: line-oriented play loop over any reader and writer
//! - **Report**: one-shot best-move, outcome and analysis queries
//! - **Scoreboard**: tally of games played in this process

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
pub mod report;
mod scoreboard;
pub mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Game driver
pub use game::{Draw, Game, GameTransition, InProgress, PlaceError, Won};

// Crate-level exports - Session results
pub use scoreboard::Scoreboard;
