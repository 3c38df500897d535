//! Tests for the engine's four-function API.

use tictactoe_engine::{
    Board, Cell, GameOutcome, GameState, Player, can_update_cell, empty_cell, get_winner, place,
    update_board,
};

fn x() -> Cell {
    Cell::Occupied(Player::X)
}

fn o() -> Cell {
    Cell::Occupied(Player::O)
}

#[test]
fn test_empty_cell_is_empty() {
    assert_eq!(empty_cell(), Cell::Empty);
    assert!(empty_cell().is_empty());
}

#[test]
fn test_empty_board_continues() {
    let board = Board::from_rows([[empty_cell(); 3]; 3]);
    assert_eq!(board, Board::new());
    assert_eq!(get_winner(&board), GameState::Continue);
}

#[test]
fn test_every_empty_cell_is_playable_once() {
    let board: Board = "X.O/.X./O..".parse().unwrap();
    for x_ in 0..3 {
        for y in 0..3 {
            let empty = board.get(x_, y) == Some(Cell::Empty);
            assert_eq!(can_update_cell(&board, x_, y), empty);
            if empty {
                let next = update_board(&board, x_, y, o()).unwrap();
                assert!(!can_update_cell(&next, x_, y));
            }
        }
    }
}

#[test]
fn test_update_does_not_mutate_input() {
    let board: Board = "X../.O./...".parse().unwrap();
    let snapshot = board;
    let _ = update_board(&board, 2, 2, x()).unwrap();
    assert_eq!(board, snapshot);
}

#[test]
fn test_construction_order_is_irrelevant() {
    let cells = [(0, 0, x()), (1, 1, o()), (0, 1, x()), (2, 2, o()), (0, 2, x())];

    let forward = cells
        .iter()
        .try_fold(Board::new(), |b, &(i, j, c)| update_board(&b, i, j, c))
        .unwrap();
    let backward = cells
        .iter()
        .rev()
        .try_fold(Board::new(), |b, &(i, j, c)| update_board(&b, i, j, c))
        .unwrap();

    assert_eq!(forward, backward);
    assert_eq!(get_winner(&forward), get_winner(&backward));
}

#[test]
fn test_row_win() {
    let board = Board::from_rows([
        [x(), x(), x()],
        [Cell::Empty; 3],
        [Cell::Empty; 3],
    ]);
    assert_eq!(get_winner(&board), GameState::Finished(GameOutcome::Winner(Player::X)));
}

#[test]
fn test_full_board_draw() {
    let board = Board::from_rows([[x(), o(), x()], [o(), x(), o()], [o(), x(), o()]]);
    assert_eq!(get_winner(&board), GameState::Finished(GameOutcome::Draw));
}

#[test]
fn test_diagonal_win() {
    let board: Board = "O../.O./..O".parse().unwrap();
    assert_eq!(get_winner(&board), GameState::Finished(GameOutcome::Winner(Player::O)));
}

#[test]
fn test_win_on_full_board_beats_draw() {
    let board: Board = "XOX/OXO/OXX".parse().unwrap();
    assert_eq!(get_winner(&board), GameState::Finished(GameOutcome::Winner(Player::X)));
}

#[test]
fn test_fewer_than_three_marks_always_continue() {
    let coords: Vec<(usize, usize)> = (0..3).flat_map(|i| (0..3).map(move |j| (i, j))).collect();
    for &(a, b) in &coords {
        for &(c, d) in &coords {
            for mark in [x(), o()] {
                let board = update_board(&Board::new(), a, b, mark).unwrap();
                let board = update_board(&board, c, d, mark).unwrap();
                assert_eq!(get_winner(&board), GameState::Continue);
            }
        }
    }
}

#[test]
fn test_sequence_scenario() {
    let moves = [
        (0, 0, Player::X),
        (1, 1, Player::O),
        (0, 1, Player::X),
        (2, 2, Player::O),
        (0, 2, Player::X),
    ];

    let mut board = Board::new();
    for (turn, &(i, j, player)) in moves.iter().enumerate() {
        assert!(can_update_cell(&board, i, j));
        board = update_board(&board, i, j, Cell::Occupied(player)).unwrap();
        let state = get_winner(&board);
        if turn < moves.len() - 1 {
            assert_eq!(state, GameState::Continue, "move {} ended the game early", turn + 1);
        } else {
            assert_eq!(state, GameState::Finished(GameOutcome::Winner(Player::X)));
        }
    }
}

#[test]
fn test_engine_ignores_finished_game() {
    // Per-cell gate only: a finished board still reports its empty cells as playable.
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert!(get_winner(&board).is_finished());
    assert!(can_update_cell(&board, 2, 2));
    assert!(place(&board, 2, 2, Player::O).is_ok());
}

#[test]
fn test_error_messages() {
    let err = place(&Board::new(), 3, 1, Player::X).unwrap_err();
    assert_eq!(err.to_string(), "Coordinates (3, 1) are outside the board");

    let board = place(&Board::new(), 1, 1, Player::X).unwrap();
    let err = place(&board, 1, 1, Player::O).unwrap_err();
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_serde_shape() {
    let state = GameState::Finished(GameOutcome::Winner(Player::O));
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, r#"{"Finished":{"Winner":"O"}}"#);
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
