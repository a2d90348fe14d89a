//! Configurable move selection with search statistics.

use super::alpha_beta::alpha_beta;
use super::minimax::minimax;
use super::scoring::Score;
use crate::{Board, Outcome, Player, Position, evaluate};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Search tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Prune with alpha-beta. Never changes the chosen move.
    #[serde(default = "default_alpha_beta")]
    alpha_beta: bool,
}

fn default_alpha_beta() -> bool {
    true
}

impl SearchConfig {
    /// Creates a configuration.
    pub fn new(alpha_beta: bool) -> Self {
        Self { alpha_beta }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(default_alpha_beta())
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including the roots of each candidate move.
    pub(crate) nodes: u64,
    /// Visited positions that were already decided.
    pub(crate) terminals: u64,
}

/// The move a search settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move, `None` when the board is full.
    best_move: Option<Position>,
    /// Score of the chosen move.
    score: Option<Score>,
    /// Work done to find it.
    stats: SearchStats,
}

/// Exact score of one candidate move for O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveScore {
    /// The candidate square.
    position: Position,
    /// Score after O plays there.
    score: Score,
}

/// Exact scores of every legal O move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// Board that was analysed.
    board: Board,
    /// Current outcome of the board.
    outcome: Outcome,
    /// One entry per empty square, in index order.
    moves: Vec<MoveScore>,
    /// First move with the highest score.
    best_move: Option<Position>,
}

/// Errors from the checked move selection.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The board already has a winner or is drawn.
    #[display("Game is already over: {}", _0)]
    GameOver(#[error(not(source))] Outcome),

    /// No square is empty.
    #[display("No legal move available")]
    NoLegalMove,
}

/// Chooses O's move by exhaustive search.
///
/// A `Searcher` holds only its configuration, so one instance can
/// serve any number of boards from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the optimal move for O, or `None` if no square is empty.
    ///
    /// Candidates are tried in index order and a later move only
    /// replaces the current best when it scores strictly higher.
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        *self.search(board).best_move()
    }

    /// Searches `board` and reports the chosen move with statistics.
    #[instrument(skip(self, board), fields(board = %board, alpha_beta = self.config.alpha_beta))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let mut stats = SearchStats::default();
        let mut best: Option<(Position, Score)> = None;

        for pos in board.empty_positions() {
            let child = board.with_mark(pos, Player::O);
            let score = if self.config.alpha_beta {
                let floor = best.map_or(Score::XWins, |(_, score)| score);
                alpha_beta(child, false, floor, Score::OWins, &mut stats)
            } else {
                minimax(child, false, &mut stats)
            };

            if best.is_none_or(|(_, current)| score > current) {
                best = Some((pos, score));
            }
            if self.config.alpha_beta && score == Score::OWins {
                break;
            }
        }

        debug!(
            best_move = ?best.map(|(pos, _)| pos),
            score = ?best.map(|(_, score)| score),
            nodes = stats.nodes,
            terminals = stats.terminals,
            "Search complete"
        );

        SearchReport {
            best_move: best.map(|(pos, _)| pos),
            score: best.map(|(_, score)| score),
            stats,
        }
    }

    /// Returns the optimal move, refusing boards that are already decided.
    ///
    /// # Errors
    ///
    /// - [`SearchError::GameOver`] if the board has a winner or is drawn.
    /// - [`SearchError::NoLegalMove`] if no square is empty.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn choose_move(&self, board: &Board) -> Result<Position, SearchError> {
        let outcome = evaluate(board);
        if outcome.is_terminal() {
            return Err(SearchError::GameOver(outcome));
        }
        self.best_move(board).ok_or(SearchError::NoLegalMove)
    }

    /// Scores every legal O move exactly.
    ///
    /// Pruning is never used here since pruned scores are only bounds.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn analyze(&self, board: &Board) -> Analysis {
        let mut stats = SearchStats::default();
        let moves: Vec<MoveScore> = board
            .empty_positions()
            .map(|position| MoveScore {
                position,
                score: minimax(board.with_mark(position, Player::O), false, &mut stats),
            })
            .collect();

        let best_move = moves
            .iter()
            .fold(None::<&MoveScore>, |best, candidate| match best {
                Some(current) if candidate.score <= current.score => Some(current),
                _ => Some(candidate),
            })
            .map(|m| m.position);

        debug!(
            moves = moves.len(),
            nodes = stats.nodes,
            "Analysis complete"
        );

        Analysis {
            board: *board,
            outcome: evaluate(board),
            moves,
            best_move,
        }
    }
}
