//! Thread-safe engine handle.
//!
//! Serializes moves and resets from concurrent callers: each operation holds
//! the lock for the whole transition, listener notification included.

use super::listener::VictoryListener;
use super::{GameEngine, GameState};
use crate::error::MoveError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{instrument, warn};

/// Cloneable handle to a single shared [`GameEngine`].
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    engine: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Wraps an engine for shared use.
    #[instrument]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Locks the engine, recovering from a poisoned lock.
    ///
    /// The engine swaps in whole states, so a panic elsewhere cannot leave
    /// a half-applied move behind.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.engine.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("Engine lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Applies a move, ignoring illegal ones, and returns the resulting state.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> GameState {
        self.lock().apply_move(index).clone()
    }

    /// Applies a move, surfacing rejections.
    #[instrument(skip(self))]
    pub fn try_move(&self, index: usize) -> Result<GameState, MoveError> {
        self.lock().try_move(index).cloned()
    }

    /// Starts a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        self.lock().reset().clone()
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> GameState {
        self.lock().state().clone()
    }

    /// Registers a victory listener.
    pub fn subscribe(&self, listener: impl VictoryListener + 'static) {
        self.lock().subscribe(listener);
    }
}
