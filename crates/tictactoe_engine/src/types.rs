//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used in text renderings.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No occupant.
    #[default]
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the occupant, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Indexed by `(x, y)` where `x` is the row (top to bottom) and `y` the
/// column (left to right). The board is a plain value: every update goes
/// through [`crate::update_board`], which returns a fresh board and leaves
/// the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    rows: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a board of nine empty cells.
    pub fn new() -> Self {
        Self {
            rows: [[crate::empty_cell(); SIZE]; SIZE],
        }
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        Self { rows }
    }

    /// Gets the cell at `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(x).and_then(|row| row.get(y)).copied()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.rows
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells().filter(|c| !c.is_empty()).count()
    }

    /// Copy of this board with one cell replaced. Caller checks bounds.
    pub(crate) fn with_cell(mut self, x: usize, y: usize, cell: Cell) -> Self {
        self.rows[x][y] = cell;
        self
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their square number (1-9) when `hints` is set.
    pub fn display(&self, hints: bool) -> String {
        let mut result = String::new();
        for (x, row) in self.rows.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Occupied(player) => player.mark(),
                    Cell::Empty if hints => char::from(b'1' + (x * SIZE + y) as u8),
                    Cell::Empty => ' ',
                };
                result.push(symbol);
                if y < SIZE - 1 {
                    result.push('|');
                }
            }
            if x < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(true))
    }
}

/// Parses the compact `XOX/O.O/...` notation: three rows separated by `/`,
/// `X` and `O` for marks, `.` or `-` for empty cells.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (x, row) in rows.iter().enumerate() {
            let marks: Vec<char> = row.trim().chars().collect();
            if marks.len() != SIZE {
                return Err(EngineError::InvalidBoard(format!(
                    "row {} has {} cells",
                    x,
                    marks.len()
                )));
            }
            for (y, mark) in marks.into_iter().enumerate() {
                let cell = match mark.to_ascii_uppercase() {
                    'X' => Cell::Occupied(Player::X),
                    'O' => Cell::Occupied(Player::O),
                    '.' | '-' => Cell::Empty,
                    other => {
                        return Err(EngineError::InvalidBoard(format!(
                            "unexpected mark {:?}",
                            other
                        )));
                    }
                };
                board = board.with_cell(x, y, cell);
            }
        }
        Ok(board)
    }
}

/// Terminal classification of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A player completed a line.
    Winner(Player),
    /// Board filled with no line completed.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Winner(player) => Some(*player),
            GameOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "Player {} wins!", player),
            GameOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Whether a game is still running, derived purely from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameState {
    /// Game in progress.
    #[default]
    Continue,
    /// Game reached an outcome.
    Finished(GameOutcome),
}

impl GameState {
    /// Returns true once an outcome has been reached.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }

    /// Returns the outcome of a finished game.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GameState::Finished(outcome) => Some(*outcome),
            GameState::Continue => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(0, 1), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(2, 2), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.filled(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!("XOX/OXO".parse::<Board>().is_err());
        assert!("XOXX/OXO/OXO".parse::<Board>().is_err());
        assert!("XOZ/OXO/OXO".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_with_hints() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(board.display(true), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
        assert_eq!(board.display(false), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }
}
