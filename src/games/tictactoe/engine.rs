//! Tic-tac-toe game engine.
//!
//! Owns the current [`GameState`] and the victory listeners. Knows nothing
//! about rendering or sound.

use super::contracts::{Contract, MoveContract};
use super::listener::VictoryListener;
use super::{Board, GameState, Mark, Outcome, Position};
use crate::error::MoveError;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Default)]
pub struct GameEngine {
    state: GameState,
    listeners: Vec<Box<dyn VictoryListener>>,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener notified each time a game is won.
    #[instrument(skip_all, fields(listeners = self.listeners.len() + 1))]
    pub fn subscribe(&mut self, listener: impl VictoryListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the mark placed by the next accepted move.
    pub fn active_mark(&self) -> Mark {
        self.state.active_mark()
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Status line for the renderer.
    pub fn status_line(&self) -> String {
        self.state.status_line()
    }

    /// Places the active mark at `index`, ignoring illegal moves.
    ///
    /// Out-of-range indices, occupied cells and finished games leave the
    /// state unchanged. Returns the (possibly unchanged) state.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> &GameState {
        if let Err(error) = self.try_move(index).map(|_| ()) {
            debug!(index, %error, "Move ignored");
        }
        &self.state
    }

    /// Places the active mark at `index`.
    ///
    /// On a winning move every listener is notified after the new state is
    /// committed.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidIndex`], [`MoveError::CellOccupied`] or
    /// [`MoveError::GameOver`]; the state is unchanged on error.
    #[instrument(skip(self), fields(active = %self.state.active_mark()))]
    pub fn try_move(&mut self, index: usize) -> Result<&GameState, MoveError> {
        let position = Position::try_from(index)?;
        let next = self.state.advance(position)?;

        if cfg!(debug_assertions) {
            MoveContract::post(&self.state, &next)?;
        }

        let previous = std::mem::replace(&mut self.state, next);
        info!(
            position = %position,
            outcome = ?self.state.outcome(),
            "Move applied"
        );

        if !previous.is_over()
            && let Some(winner) = self.state.outcome().winner()
        {
            self.notify_victory(winner);
        }

        Ok(&self.state)
    }

    /// Replaces the game with a fresh one. Listeners stay subscribed.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new();
        info!("Game reset");
        &self.state
    }

    fn notify_victory(&mut self, winner: Mark) {
        info!(%winner, listeners = self.listeners.len(), "Game won");
        for listener in &mut self.listeners {
            listener.on_victory(winner);
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
