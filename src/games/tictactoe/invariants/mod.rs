//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them as postconditions in debug builds; tests
//! use them directly.

use super::GameState;
use derive_new::new;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants checked together, reporting every violation.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S: ?Sized, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// A state before and after one accepted move.
#[derive(Debug, Clone, Copy, new)]
pub struct Transition<'a> {
    /// State the move was applied to.
    pub before: &'a GameState,
    /// State the move produced.
    pub after: &'a GameState,
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;
pub mod outcome_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All single-state invariants as a composable set.
pub type GameInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    OutcomeConsistentInvariant,
);

/// Checks a transition against every invariant.
///
/// Single-state invariants are checked on `after`; board monotonicity on the
/// pair.
pub fn check_transition(transition: Transition<'_>) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = GameInvariants::check_all(transition.after)
        .err()
        .unwrap_or_default();
    if !MonotonicBoardInvariant::holds(&transition) {
        violations.push(InvariantViolation::new(MonotonicBoardInvariant::description()));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
