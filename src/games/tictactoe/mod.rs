//! Tic-tac-toe game-state engine.
//!
//! [`GameState`] is a plain value advanced one move at a time; [`GameEngine`]
//! owns the current state and notifies [`VictoryListener`]s when a game is
//! won; [`SharedEngine`] serializes access for concurrent callers.

mod contracts;
mod engine;
pub mod invariants;
mod listener;
mod position;
pub mod rules;
mod shared;
mod state;
mod types;

pub use contracts::{Contract, MoveContract};
pub use engine::GameEngine;
pub use listener::VictoryListener;
pub use position::{Direction, Position};
pub use rules::{evaluate_winner, is_draw, is_full};
pub use shared::SharedEngine;
pub use state::{GameState, Outcome};
pub use types::{Board, Cell, Mark};
