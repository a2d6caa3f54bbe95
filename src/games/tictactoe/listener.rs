//! Victory notification seam between the engine and its collaborators.

use super::Mark;

/// Receives a notification when a game is won.
///
/// Listeners are fire-and-forget: they cannot report failure back to the
/// engine, and the engine's state is already committed when they run.
pub trait VictoryListener: Send {
    /// Called once per won game with the winning mark.
    fn on_victory(&mut self, winner: Mark);
}

impl<F> VictoryListener for F
where
    F: FnMut(Mark) + Send,
{
    fn on_victory(&mut self, winner: Mark) {
        self(winner)
    }
}
