//! Strictly Tic-Tac-Toe widget.
//!
//! A 3x3 tic-tac-toe game built around a pure game-state engine.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns a [`GameState`] and advances it one
//!   move at a time; win and draw detection live in [`rules`].
//! - **Audio**: [`VictoryChime`] subscribes to wins and plays a synthesized
//!   tone through a lazily opened, best-effort output.
//! - **Terminal UI**: [`run_tui`] renders the board with `ratatui`.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe_widget::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.apply_move(cell);
//! }
//! assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
//! assert_eq!(engine.status_line(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audio;
mod config;
mod error;
mod games;
mod tui;

// Crate-level exports - Game engine (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Contract, Direction, GameEngine, GameState, Mark, MoveContract, Outcome, Position,
    SharedEngine, VictoryListener, evaluate_winner, invariants, is_draw, is_full, rules,
};

// Crate-level exports - Errors
pub use error::{AudioError, ConfigError, MoveError};

// Crate-level exports - Audio
pub use audio::{
    AudioOutput, AudioSink, BellSink, NullSink, SinkFactory, SpeakerSink, ToneSpec, VictoryChime,
    WavFileSink, encode_wav,
};

// Crate-level exports - Configuration
pub use config::{AudioConfig, WidgetConfig};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, action_for, run_tui};
