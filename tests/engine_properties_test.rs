//! Property tests for the game-state engine.

use proptest::prelude::*;
use strictly_tictactoe_widget::invariants::{GameInvariants, InvariantSet};
use strictly_tictactoe_widget::{Board, Cell, GameEngine, GameState, Mark, Outcome, evaluate_winner};

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Mark::X)),
        Just(Cell::Occupied(Mark::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(cell()).prop_map(Board::from_cells)
}

/// Indices include a few out-of-range values.
fn moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..24)
}

proptest! {
    #[test]
    fn active_mark_alternates_until_game_ends(moves in moves()) {
        let mut engine = GameEngine::new();
        let mut expected = Mark::X;

        for index in moves {
            let before = engine.state().clone();
            let after = engine.apply_move(index).clone();

            if after == before {
                continue;
            }
            prop_assert!(!before.is_over());
            let placed = after.history().last().copied().unwrap();
            prop_assert_eq!(after.board().get(placed), Cell::Occupied(expected));
            expected = expected.opponent();
            prop_assert_eq!(after.active_mark(), expected);
        }
    }

    #[test]
    fn occupied_cell_is_noop(moves in moves(), repeat in 0usize..9) {
        let mut engine = GameEngine::new();
        for index in moves {
            engine.apply_move(index);
        }
        if !engine.board().cells()[repeat].is_empty() {
            let before = engine.state().clone();
            engine.apply_move(repeat);
            prop_assert_eq!(engine.state(), &before);
        }
    }

    #[test]
    fn finished_game_never_changes(moves in moves(), extra in moves()) {
        let mut engine = GameEngine::new();
        for index in moves {
            engine.apply_move(index);
        }
        if engine.state().is_over() {
            let before = engine.state().clone();
            for index in extra {
                engine.apply_move(index);
                prop_assert_eq!(engine.state(), &before);
            }
        }
    }

    #[test]
    fn invariants_hold_after_every_move(moves in moves()) {
        let mut engine = GameEngine::new();
        for index in moves {
            engine.apply_move(index);
            prop_assert!(GameInvariants::check_all(engine.state()).is_ok());
        }
    }

    #[test]
    fn outcome_follows_win_precedence(moves in moves()) {
        let mut engine = GameEngine::new();
        for index in moves {
            engine.apply_move(index);
        }
        let board = engine.board();
        match engine.outcome() {
            Outcome::Won(mark) => prop_assert_eq!(evaluate_winner(board), Some(mark)),
            Outcome::Draw => prop_assert!(strictly_tictactoe_widget::is_draw(board)),
            Outcome::InProgress => {
                prop_assert_eq!(evaluate_winner(board), None);
                prop_assert!(!strictly_tictactoe_widget::is_full(board));
            }
        }
    }

    #[test]
    fn evaluate_winner_is_deterministic(board in board()) {
        let first = evaluate_winner(&board);
        prop_assert_eq!(evaluate_winner(&board.clone()), first);
        if let Some(mark) = first {
            prop_assert!(board.count(mark) >= 3);
        }
    }

    #[test]
    fn reset_always_yields_fresh_game(moves in moves()) {
        let mut engine = GameEngine::new();
        for index in moves {
            engine.apply_move(index);
        }
        prop_assert_eq!(engine.reset(), &GameState::new());
        prop_assert_eq!(engine.active_mark(), Mark::X);
        prop_assert_eq!(engine.outcome(), Outcome::InProgress);
    }
}

#[test]
fn evaluate_winner_empty_board() {
    assert_eq!(evaluate_winner(&Board::new()), None);
}
