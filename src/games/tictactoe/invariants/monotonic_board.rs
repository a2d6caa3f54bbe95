//! Monotonic board invariant: cells never change once set.

use super::super::Position;
use super::{Invariant, Transition};

/// Invariant: one move fills exactly one empty cell and touches nothing else.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let before = transition.before.board();
        let after = transition.after.board();
        let mut filled = 0;

        for pos in Position::ALL {
            let (old, new) = (before.get(pos), after.get(pos));
            if old == new {
                continue;
            }
            if !old.is_empty() || new.is_empty() {
                return false;
            }
            filled += 1;
        }

        filled == 1
    }

    fn description() -> &'static str {
        "Board cells are monotonic (one empty cell filled per move)"
    }
}
