//! Outcome consistency invariant: the stored outcome is the computed one.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: `outcome` equals what the rules compute from the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome() == rules::outcome_of(state.board())
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}
