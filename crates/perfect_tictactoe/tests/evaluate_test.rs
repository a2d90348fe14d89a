//! Tests for board evaluation across the whole board space.

use perfect_tictactoe::{Board, Line, LineKind, Outcome, Player, Square, evaluate};

/// Every assignment of Empty/X/O to the nine cells, reachable or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(&squares).unwrap()
    })
}

#[test]
fn test_evaluate_symmetric_under_relabeling() {
    for board in all_boards() {
        assert_eq!(
            evaluate(&board.swap_marks()),
            evaluate(&board).swapped(),
            "board {board}"
        );
    }
}

#[test]
fn test_reported_line_is_complete() {
    for board in all_boards() {
        if let Outcome::Win { player, line } = evaluate(&board) {
            for pos in line.cells() {
                assert_eq!(board.get(pos), Square::Occupied(player), "board {board}");
            }
        }
    }
}

#[test]
fn test_reported_line_is_first_complete_line() {
    for board in all_boards() {
        let first = Line::ALL.into_iter().find(|line| {
            let [a, b, c] = line.cells().map(|pos| board.get(pos));
            a != Square::Empty && a == b && b == c
        });
        assert_eq!(evaluate(&board).line(), first, "board {board}");
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    for board in all_boards().filter(Board::is_full) {
        let outcome = evaluate(&board);
        assert!(
            matches!(outcome, Outcome::Win { .. } | Outcome::Draw),
            "board {board}"
        );
        assert_eq!(outcome == Outcome::Draw, outcome.line().is_none());
    }
}

#[test]
fn test_in_progress_has_empty_square_and_no_line() {
    for board in all_boards() {
        if evaluate(&board) == Outcome::InProgress {
            assert!(!board.is_full(), "board {board}");
        }
    }
}

#[test]
fn test_two_rows_resolve_to_top_row() {
    // Unreachable, but the fixed line order still decides.
    let board: Board = "XXX/OOO/...".parse().unwrap();
    assert_eq!(
        evaluate(&board),
        Outcome::Win {
            player: Player::X,
            line: Line::of(LineKind::TopRow),
        }
    );
}

#[test]
fn test_row_beats_column() {
    // O holds the bottom row and the right column.
    let board: Board = "XXO/XXO/OOO".parse().unwrap();
    assert_eq!(
        evaluate(&board).line(),
        Some(Line::of(LineKind::BottomRow))
    );
}

#[test]
fn test_column_beats_diagonal() {
    // X holds the left column and the main diagonal.
    let board: Board = "X.O/XX./X.X".parse().unwrap();
    assert_eq!(
        evaluate(&board).line(),
        Some(Line::of(LineKind::LeftColumn))
    );
}

#[test]
fn test_draw_board() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_win_outcome_survives_json() {
    let outcome = evaluate(&"XOO/.X./O.X".parse().unwrap());
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, r#"{"Win":{"player":"X","line":"MainDiagonal"}}"#);
    let back: Outcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
    assert!(Line::ALL.contains(&back.line().unwrap()));
}
