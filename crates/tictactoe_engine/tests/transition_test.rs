//! Tests for the application state machine.

use tictactoe_engine::{
    Action, ApplicationState, Cell, GameOutcome, GameState, Player, transition,
};

#[test]
fn test_initial_state() {
    let state = ApplicationState::initial();
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.winner(), GameState::Continue);
    assert_eq!(state.board().filled(), 0);
}

#[test]
fn test_players_alternate() {
    let state = ApplicationState::initial();
    let state = transition(&state, Action::Move { x: 1, y: 1 });
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(state.board().get(1, 1), Some(Cell::Occupied(Player::X)));

    let state = transition(&state, Action::Move { x: 0, y: 0 });
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.board().get(0, 0), Some(Cell::Occupied(Player::O)));
}

#[test]
fn test_illegal_moves_leave_state_unchanged() {
    let state = transition(&ApplicationState::initial(), Action::Move { x: 1, y: 1 });

    assert_eq!(transition(&state, Action::Move { x: 1, y: 1 }), state);
    assert_eq!(transition(&state, Action::Move { x: 3, y: 0 }), state);
    assert_eq!(transition(&state, Action::Move { x: 0, y: 9 }), state);
}

#[test]
fn test_previous_state_survives_transition() {
    let before = ApplicationState::initial();
    let after = transition(&before, Action::Move { x: 0, y: 0 });
    assert_ne!(before, after);
    assert_eq!(before, ApplicationState::initial());
}

#[test]
fn test_winning_sequence() {
    let state = ApplicationState::initial().apply_moves([(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(state.winner(), GameState::Finished(GameOutcome::Winner(Player::X)));
}

#[test]
fn test_draw_sequence() {
    // X O X / X O O / O X X
    let state = ApplicationState::initial().apply_moves([
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(state.winner(), GameState::Finished(GameOutcome::Draw));
    assert_eq!(state.board().filled(), 9);
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let finished = ApplicationState::initial().apply_moves([(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let next = transition(&finished, Action::Move { x: 2, y: 0 });
    assert_eq!(next, finished);
}

#[test]
fn test_restart() {
    let state = ApplicationState::initial().apply_moves([(0, 0), (1, 1)]);
    assert_eq!(transition(&state, Action::Restart), ApplicationState::initial());

    let finished = ApplicationState::initial().apply_moves([(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(transition(&finished, Action::Restart), ApplicationState::initial());
}
