//! The eight winning lines.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Which of the eight lines a [`Line`] is.
///
/// Variants are declared in evaluation order: rows, then columns,
/// then diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum LineKind {
    /// Cells 0, 1, 2.
    #[display("top row")]
    TopRow,
    /// Cells 3, 4, 5.
    #[display("middle row")]
    MiddleRow,
    /// Cells 6, 7, 8.
    #[display("bottom row")]
    BottomRow,
    /// Cells 0, 3, 6.
    #[display("left column")]
    LeftColumn,
    /// Cells 1, 4, 7.
    #[display("center column")]
    CenterColumn,
    /// Cells 2, 5, 8.
    #[display("right column")]
    RightColumn,
    /// Cells 0, 4, 8.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells 2, 4, 6.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Three positions which, held by one player, win the game.
///
/// Serialized as its [`LineKind`], so a deserialized line is always
/// one of [`Line::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LineKind", into = "LineKind")]
pub struct Line {
    kind: LineKind,
    cells: [Position; 3],
}

impl Line {
    /// All lines in evaluation order.
    pub const ALL: [Line; 8] = [
        // Rows
        Line::new(
            LineKind::TopRow,
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
        ),
        Line::new(
            LineKind::MiddleRow,
            [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
        ),
        Line::new(
            LineKind::BottomRow,
            [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        ),
        // Columns
        Line::new(
            LineKind::LeftColumn,
            [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        ),
        Line::new(
            LineKind::CenterColumn,
            [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
        ),
        Line::new(
            LineKind::RightColumn,
            [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
        ),
        // Diagonals
        Line::new(
            LineKind::MainDiagonal,
            [Position::TopLeft, Position::Center, Position::BottomRight],
        ),
        Line::new(
            LineKind::AntiDiagonal,
            [Position::TopRight, Position::Center, Position::BottomLeft],
        ),
    ];

    const fn new(kind: LineKind, cells: [Position; 3]) -> Self {
        Self { kind, cells }
    }

    /// Looks up the line of the given kind.
    pub fn of(kind: LineKind) -> Self {
        Self::ALL[kind as usize]
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three positions, first to last.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// The three cell indices, first to last.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

impl From<LineKind> for Line {
    fn from(kind: LineKind) -> Self {
        Line::of(kind)
    }
}

impl From<Line> for LineKind {
    fn from(line: Line) -> Self {
        line.kind
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
