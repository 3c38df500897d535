//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| !c.is_empty())
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
