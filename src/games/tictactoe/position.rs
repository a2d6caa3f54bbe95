//! Named cells of the 3x3 board.

use super::types::Board;
use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board, addressed 0-8 in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 0)
    TopLeft,
    /// Top-center (cell 1)
    TopCenter,
    /// Top-right (cell 2)
    TopRight,
    /// Middle-left (cell 3)
    MiddleLeft,
    /// Center (cell 4)
    Center,
    /// Middle-right (cell 5)
    MiddleRight,
    /// Bottom-left (cell 6)
    BottomLeft,
    /// Bottom-center (cell 7)
    BottomCenter,
    /// Bottom-right (cell 8)
    BottomRight,
}

/// Direction for moving a cursor across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2) of this cell.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) of this cell.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Neighbouring cell in `direction`, staying put at the board edge.
    #[instrument]
    pub fn step(self, direction: Direction) -> Self {
        let (row, col) = (self.row(), self.col());
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(2), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(2)),
        };
        Self::ALL[row * 3 + col]
    }

    /// Positions whose cells are still empty.
    #[instrument(skip(board))]
    pub fn open_cells(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(MoveError::InvalidIndex(index))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
