//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The 8 winning lines, in scan order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// First completed line in scan order, with the mark that completed it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the mark occupying the first fully-matched line, or `None`.
/// When one move completes two lines the scan order decides, which only
/// matters for boards assembled by hand.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
