//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! state storage so the engine, the invariants and the renderer all share a
//! single definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{evaluate_winner, winning_line, LINES};

use super::{Board, Outcome};

/// Classifies a board. A completed line takes precedence over a full board.
pub fn outcome_of(board: &Board) -> Outcome {
    match evaluate_winner(board) {
        Some(mark) => Outcome::Won(mark),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
