//! Application state for the terminal widget.

use super::input::{Action, action_for};
use crate::games::tictactoe::{GameEngine, GameState, Position};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

/// Engine plus the UI-only state around it.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    quit: bool,
}

impl App {
    /// Creates an app around `engine`, cursor in the center.
    #[instrument(skip(engine))]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for(key, self.state().is_over()) {
            self.apply(action);
        }
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveCursor(direction) => self.cursor = self.cursor.step(direction),
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::PlayAgain => {
                self.engine.reset();
            }
            Action::Quit => self.quit = true,
        }
    }

    /// Cells are inert once played or once the game is over.
    fn play(&mut self, pos: Position) {
        if !self.state().accepts(pos) {
            debug!(%pos, "Cell inactive, input ignored");
            return;
        }
        self.engine.apply_move(pos.to_index());
    }
}
