//! History consistency invariant: history matches occupied cells.

use super::super::GameState;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every history entry is a distinct occupied cell, and no cell
/// is occupied without one.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let distinct: HashSet<_> = history.iter().collect();

        distinct.len() == history.len()
            && history.len() == state.board().occupied_count()
            && history.iter().all(|pos| !state.board().is_empty(*pos))
    }

    fn description() -> &'static str {
        "History matches occupied cells"
    }
}
