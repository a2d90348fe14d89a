//! Win detection logic for tic-tac-toe.

use super::line::Line;
use crate::{Board, Player, Square};

/// Finds the first complete line on the board.
///
/// Lines are checked in [`Line::ALL`] order, so a board with more than
/// one complete line always reports the earliest row, then column,
/// then diagonal.
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let square = board.get(a);
        match square {
            Square::Occupied(player) if board.get(b) == square && board.get(c) == square => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LineKind;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let (player, line) = winning_line(&board("XXX/OO./...")).unwrap();
        assert_eq!(player, Player::X);
        assert_eq!(line.kind(), LineKind::TopRow);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let (player, line) = winning_line(&board("X.O/XO./O..")).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.kind(), LineKind::AntiDiagonal);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winning_line(&board("XX./.../...")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(winning_line(&board("XXO/.../...")), None);
    }
}
