//! The game-state engine: pure functions over [`Board`] values.
//!
//! None of these functions hold state. Boards go in, fresh boards or
//! classifications come out, and the inputs are never touched.

use crate::error::EngineError;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Cell, GameOutcome, GameState, Player, SIZE};
use tracing::{debug, instrument};

/// Constructs an empty cell.
pub fn empty_cell() -> Cell {
    Cell::Empty
}

/// Returns true iff `(x, y)` lies on the board and the cell there is empty.
///
/// Out-of-range coordinates are never playable. The overall game state is
/// not consulted; callers stop issuing moves once [`get_winner`] reports
/// [`GameState::Finished`].
#[instrument(skip(board))]
pub fn can_update_cell(board: &Board, x: usize, y: usize) -> bool {
    board.get(x, y).is_some_and(Cell::is_empty)
}

/// Returns a new board equal to `board` except that `(x, y)` holds `cell`.
///
/// The input board is left unchanged. Occupancy is not checked: gate with
/// [`can_update_cell`] first, or use [`place`] which does both.
///
/// # Errors
///
/// Returns [`EngineError::OutOfRange`] when `(x, y)` is outside the grid.
#[instrument(skip(board))]
pub fn update_board(board: &Board, x: usize, y: usize, cell: Cell) -> Result<Board, EngineError> {
    check_bounds(x, y)?;
    Ok(board.with_cell(x, y, cell))
}

/// Places `player`'s mark at `(x, y)` after validating the move.
///
/// # Errors
///
/// - [`EngineError::OutOfRange`] when `(x, y)` is outside the grid.
/// - [`EngineError::CellOccupied`] when the cell already carries a mark.
#[instrument(skip(board))]
pub fn place(board: &Board, x: usize, y: usize, player: Player) -> Result<Board, EngineError> {
    check_bounds(x, y)?;
    if !can_update_cell(board, x, y) {
        debug!(x, y, "Rejected move on occupied cell");
        return Err(EngineError::CellOccupied { x, y });
    }
    update_board(board, x, y, Cell::Occupied(player))
}

/// Classifies a board.
///
/// Lines are scanned rows first (top to bottom), then columns (left to
/// right), then the two diagonals, and the first completed line decides the
/// winner. With no completed line a full board is a draw.
#[instrument(skip(board))]
pub fn get_winner(board: &Board) -> GameState {
    if let Some(player) = check_winner(board) {
        GameState::Finished(GameOutcome::Winner(player))
    } else if is_full(board) {
        GameState::Finished(GameOutcome::Draw)
    } else {
        GameState::Continue
    }
}

fn check_bounds(x: usize, y: usize) -> Result<(), EngineError> {
    if x >= SIZE || y >= SIZE {
        return Err(EngineError::OutOfRange { x, y });
    }
    Ok(())
}
