//! Tests for the minimax opponent.

use perfect_tictactoe::{
    Board, Outcome, Player, Position, Score, SearchConfig, Searcher, Square, best_move, evaluate,
    score, score_pruned,
};
use std::collections::HashSet;

fn board(notation: &str) -> Board {
    notation.parse().unwrap()
}

/// Every board reachable by alternating play with `first` opening.
fn reachable(first: Player) -> Vec<(Board, Player)> {
    fn walk(
        board: Board,
        to_move: Player,
        seen: &mut HashSet<Board>,
        out: &mut Vec<(Board, Player)>,
    ) {
        if !seen.insert(board) {
            return;
        }
        out.push((board, to_move));
        if evaluate(&board).is_terminal() {
            return;
        }
        for pos in board.empty_positions() {
            walk(board.with_mark(pos, to_move), to_move.opponent(), seen, out);
        }
    }

    let mut out = Vec::new();
    walk(Board::new(), first, &mut HashSet::new(), &mut out);
    out
}

/// Plays every X strategy against the engine and returns how each game ended.
fn play_out(board: Board, to_move: Player, endings: &mut Vec<(Board, Outcome)>) {
    let outcome = evaluate(&board);
    if outcome.is_terminal() {
        endings.push((board, outcome));
        return;
    }
    match to_move {
        Player::X => {
            for pos in board.empty_positions() {
                play_out(board.with_mark(pos, Player::X), Player::O, endings);
            }
        }
        Player::O => {
            let pos = best_move(&board).unwrap();
            assert!(
                board.is_empty(pos),
                "engine chose occupied {pos} on {board}"
            );
            play_out(board.with_mark(pos, Player::O), Player::X, endings);
        }
    }
}

#[test]
fn test_blocks_immediate_threat() {
    assert_eq!(best_move(&board("XX./O../...")), Some(Position::TopRight));
}

#[test]
fn test_takes_win_over_block() {
    assert_eq!(best_move(&board("OO./XX./...")), Some(Position::TopRight));
}

#[test]
fn test_takes_win_when_not_first_empty() {
    // Blocking X's center column comes first in index order, but O wins on the right column.
    assert_eq!(best_move(&board(".../XXO/.XO")), Some(Position::TopRight));
    // Blocking X's left column comes first, but O wins on the center column.
    assert_eq!(best_move(&board(".../XO./XOX")), Some(Position::TopCenter));
}

#[test]
fn test_opening_move_regression() {
    // Every opening draws, so the first square wins the tie-break.
    assert_eq!(best_move(&Board::new()), Some(Position::TopLeft));
    let plain = Searcher::new(SearchConfig::new(false));
    assert_eq!(plain.best_move(&Board::new()), Some(Position::TopLeft));
}

#[test]
fn test_reply_to_center_opening() {
    // Against a center opening only corners hold the draw.
    let reply = best_move(&board(".../.X./...")).unwrap();
    assert_eq!(reply, Position::TopLeft);
}

#[test]
fn test_reply_to_corner_opening_takes_center() {
    assert_eq!(best_move(&board("X../.../...")), Some(Position::Center));
}

#[test]
fn test_full_board_returns_none() {
    assert_eq!(best_move(&board("XOX/XOO/OXX")), None);
}

#[test]
fn test_never_returns_occupied_square() {
    for (b, _) in reachable(Player::X).into_iter().chain(reachable(Player::O)) {
        if evaluate(&b) != Outcome::InProgress {
            continue;
        }
        let pos = best_move(&b).unwrap();
        assert!(b.is_empty(pos), "engine chose occupied {pos} on {b}");
    }
}

#[test]
fn test_move_then_evaluate_round_trip() {
    for (b, to_move) in reachable(Player::X) {
        if to_move != Player::O || evaluate(&b).is_terminal() {
            continue;
        }
        let pos = best_move(&b).unwrap();
        let next = b.with_mark(pos, Player::O);
        // O's own move can never hand X the win.
        assert_ne!(evaluate(&next).winner(), Some(Player::X), "{b} -> {next}");
    }
}

#[test]
fn test_pruned_scores_match_minimax() {
    for (b, to_move) in reachable(Player::X) {
        let maximizing = to_move == Player::O;
        assert_eq!(
            score(&b, maximizing),
            score_pruned(&b, maximizing),
            "board {b}"
        );
    }
}

#[test]
fn test_pruned_choice_matches_plain_choice() {
    let plain = Searcher::new(SearchConfig::new(false));
    let pruned = Searcher::new(SearchConfig::new(true));
    for (b, _) in reachable(Player::X) {
        if evaluate(&b).is_terminal() {
            continue;
        }
        assert_eq!(plain.best_move(&b), pruned.best_move(&b), "board {b}");
    }
}

#[test]
fn test_best_move_scores_as_well_as_position() {
    for (b, to_move) in reachable(Player::X) {
        if to_move != Player::O || evaluate(&b).is_terminal() {
            continue;
        }
        let pos = best_move(&b).unwrap();
        assert_eq!(
            score(&b.with_mark(pos, Player::O), false),
            score(&b, true),
            "board {b}"
        );
    }
}

#[test]
fn test_unbeatable_when_human_opens() {
    let mut endings = Vec::new();
    play_out(Board::new(), Player::X, &mut endings);
    assert!(!endings.is_empty());
    for (b, outcome) in &endings {
        assert_ne!(outcome.winner(), Some(Player::X), "X won on {b}");
    }
}

#[test]
fn test_unbeatable_when_computer_opens() {
    let mut endings = Vec::new();
    play_out(Board::new(), Player::O, &mut endings);
    for (b, outcome) in &endings {
        assert_ne!(outcome.winner(), Some(Player::X), "X won on {b}");
    }
}

#[test]
fn test_score_convention_is_absolute() {
    let x_won = board("XXX/OO./...");
    assert_eq!(score(&x_won, true), Score::XWins);
    assert_eq!(score(&x_won, false).value(), -1);
}

#[test]
fn test_searcher_shared_across_threads() {
    let searcher = Searcher::default();
    let boards = ["XX./O../...", "OO./XX./...", "X../.../...", "........."];
    let expected = [
        Position::TopRight,
        Position::TopRight,
        Position::Center,
        Position::TopLeft,
    ];

    let results: Vec<Option<Position>> = std::thread::scope(|scope| {
        let handles: Vec<_> = boards
            .iter()
            .map(|notation| {
                let b = board(notation);
                scope.spawn(move || searcher.best_move(&b))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (result, want) in results.into_iter().zip(expected) {
        assert_eq!(result, Some(want));
    }
}

#[test]
fn test_analysis_serializes() {
    let analysis = Searcher::default().analyze(&board("XX./O../..."));
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["best_move"], "TopRight");
    assert_eq!(json["moves"].as_array().unwrap().len(), 6);
}

#[test]
fn test_board_squares_after_search_untouched() {
    let b = board("XX./O../...");
    let before = *b.squares();
    best_move(&b);
    assert_eq!(*b.squares(), before);
    assert_eq!(b.get(Position::TopRight), Square::Empty);
}
