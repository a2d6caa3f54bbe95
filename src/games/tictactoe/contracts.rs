//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} move {Q}.

use super::invariants::{self, Transition};
use super::{GameState, Position};
use crate::error::MoveError;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Contract for placing the active mark.
///
/// Preconditions:
/// - Game is still in progress
/// - Target cell is empty
///
/// Postconditions:
/// - Board is monotonic
/// - Marks alternate
/// - History matches the board
/// - Outcome matches the board
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    #[instrument(skip(state))]
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        if state.is_over() {
            return Err(MoveError::GameOver);
        }
        if !state.board().is_empty(*pos) {
            return Err(MoveError::CellOccupied(*pos));
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        invariants::check_transition(Transition::new(before, after)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
