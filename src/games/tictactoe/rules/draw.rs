//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::evaluate_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A full board with no completed line.
///
/// A winning line on a full board is a win, never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate_winner(board).is_none()
}
