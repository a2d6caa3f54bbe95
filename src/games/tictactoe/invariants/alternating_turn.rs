//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: marks alternate, X first.
///
/// The active mark is X after an even number of moves and O after an odd
/// number, and each played cell holds the mark its turn implies.
pub struct AlternatingTurnInvariant;

/// Mark that plays the `turn`-th move (0-based).
pub(crate) fn mark_for_turn(turn: usize) -> Mark {
    if turn % 2 == 0 { Mark::X } else { Mark::O }
}

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let marks_alternate = history
            .iter()
            .enumerate()
            .all(|(turn, pos)| state.board().get(*pos).mark() == Some(mark_for_turn(turn)));

        marks_alternate && state.active_mark() == mark_for_turn(history.len())
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight, Position::BottomLeft] {
            state = state.advance(pos).unwrap();
            assert!(AlternatingTurnInvariant::holds(&state));
        }
        assert_eq!(state.active_mark(), Mark::X);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut state = GameState::new().advance(Position::TopLeft).unwrap();
        state = state.advance(Position::Center).unwrap();
        state.board.set(Position::Center, Cell::Occupied(Mark::X));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_active_mark_violates() {
        let mut state = GameState::new().advance(Position::TopLeft).unwrap();
        state.active_mark = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
