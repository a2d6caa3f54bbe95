//! Game state: board, active mark and outcome folded into one value.
//!
//! Every accepted move produces the next [`GameState`] in a single step, so
//! the board and the outcome can never be observed out of sync.

use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::rules;
use super::types::{Board, Cell, Mark};
use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A line was completed by this mark.
    Won(Mark),
    /// The board filled with no completed line.
    Draw,
}

impl Outcome {
    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Mark placed by the next accepted move.
    pub(crate) active_mark: Mark,
    /// Current classification.
    pub(crate) outcome: Outcome,
    /// Positions played, in order.
    pub(crate) history: Vec<Position>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_mark: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark placed by the next accepted move.
    pub fn active_mark(&self) -> Mark {
        self.active_mark
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the positions played so far.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Whether a move at `pos` would be accepted.
    pub fn accepts(&self, pos: Position) -> bool {
        !self.is_over() && self.board.is_empty(pos)
    }

    /// Status line shown above the board.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Won(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.active_mark),
        }
    }

    /// Computes the state after the active mark plays at `pos`.
    ///
    /// The mark is written, the turn flips and the outcome is recomputed in
    /// one step. `self` is left untouched, including on error.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is won or drawn, and
    /// [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(active = %self.active_mark))]
    pub fn advance(&self, pos: Position) -> Result<GameState, MoveError> {
        MoveContract::pre(self, &pos)?;

        let mut board = self.board.clone();
        board.set(pos, Cell::Occupied(self.active_mark));
        let outcome = rules::outcome_of(&board);
        let mut history = self.history.clone();
        history.push(pos);

        trace!(?outcome, moves = history.len(), "Computed next state");
        Ok(GameState {
            board,
            active_mark: self.active_mark.opponent(),
            outcome,
            history,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.active_mark(), Mark::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(state.history().is_empty());
        assert_eq!(state.status_line(), "Next player: X");
    }

    #[test]
    fn test_advance_leaves_original_untouched() {
        let state = GameState::new();
        let next = state.advance(Position::Center).expect("empty cell");
        assert_eq!(state, GameState::new());
        assert_eq!(next.board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.active_mark(), Mark::O);
        assert_eq!(next.history(), &[Position::Center]);
    }

    #[test]
    fn test_advance_rejects_occupied_cell() {
        let state = GameState::new().advance(Position::Center).unwrap();
        assert_eq!(
            state.advance(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_status_lines() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            state = state.advance(pos).unwrap();
        }
        assert_eq!(state.outcome(), Outcome::Won(Mark::X));
        assert_eq!(state.status_line(), "Winner: X");
        assert_eq!(state.advance(Position::BottomLeft), Err(MoveError::GameOver));

        let mut state = GameState::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state = state.advance(Position::ALL[index]).unwrap();
        }
        assert_eq!(state.outcome(), Outcome::Draw);
        assert_eq!(state.status_line(), "It's a draw!");
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Won(Mark::O).to_string(), "Player O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }
}
