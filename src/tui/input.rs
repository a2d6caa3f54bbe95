//! Key bindings for the board.

use crate::games::tictactoe::{Direction, Position};
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Start a fresh game.
    PlayAgain,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action. Enter and Space activate "Play Again" once
/// the game is over.
pub fn action_for(key: KeyCode, game_over: bool) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') if game_over => Some(Action::PlayAgain),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::PlayAgain),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Play),
        _ => None,
    }
}
