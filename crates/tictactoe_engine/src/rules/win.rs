//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// All eight lines as `(x, y)` triples, in scan order: rows top to bottom,
/// columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in [`LINES`] order, or
/// `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let first = board.get(a.0, a.1)?;
        match first {
            Cell::Occupied(player)
                if board.get(b.0, b.1) == Some(first) && board.get(c.0, c.1) == Some(first) =>
            {
                Some(player)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_each_column() {
        for board in ["O../O../O..", ".O./.O./.O.", "..O/..O/..O"] {
            let board: Board = board.parse().unwrap();
            assert_eq!(check_winner(&board), Some(Player::O));
        }
    }

    #[test]
    fn test_winner_diagonals() {
        let main: Board = "O../.O./..O".parse().unwrap();
        let anti: Board = "..X/.X./X..".parse().unwrap();
        assert_eq!(check_winner(&main), Some(Player::O));
        assert_eq!(check_winner(&anti), Some(Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Two completed lines only arise from an illegally continued game.
        let board: Board = "XXX/.../OOO".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        let board: Board = "OOO/.../XXX".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        let board: Board = "X.O/X.O/X.O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
