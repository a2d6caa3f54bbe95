//! Error types for the widget.
//!
//! Move rejections are a closed set of domain errors. Audio and configuration
//! failures carry the location where they were raised.

use crate::games::tictactoe::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a move was rejected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// A transition broke a board invariant (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Audio output error with location tracking.
///
/// Never escapes the audio collaborator: the chime logs it and carries on.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for AudioError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(
            MoveError::InvalidIndex(9).to_string(),
            "Cell index 9 is out of range (must be 0-8)"
        );
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "Cell Center is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }

    #[test]
    fn test_audio_error_tracks_location() {
        let err = AudioError::new("no output device");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Audio error: no output device at "));
    }

    #[test]
    fn test_config_error_from_caller() {
        let err = ConfigError::new("bad toml");
        assert_eq!(err.message, "bad toml");
        assert!(err.line > 0);
    }
}
