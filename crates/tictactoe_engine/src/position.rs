//! Named squares of the board.
//!
//! The engine addresses cells by `(x, y)`. Front ends usually prefer names
//! or the numbers 1-9 printed on an empty grid, so [`Position`] converts
//! between all three.

use crate::engine::can_update_cell;
use crate::types::{Board, SIZE};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A square on the tic-tac-toe board, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left, `(0, 0)`.
    TopLeft,
    /// Top-center, `(0, 1)`.
    TopCenter,
    /// Top-right, `(0, 2)`.
    TopRight,
    /// Middle-left, `(1, 0)`.
    MiddleLeft,
    /// Center, `(1, 1)`.
    Center,
    /// Middle-right, `(1, 2)`.
    MiddleRight,
    /// Bottom-left, `(2, 0)`.
    BottomLeft,
    /// Bottom-center, `(2, 1)`.
    BottomCenter,
    /// Bottom-right, `(2, 2)`.
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Board coordinates `(x, y)`.
    pub fn coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index / SIZE, index % SIZE)
    }

    /// Creates a position from board coordinates.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x >= SIZE || y >= SIZE {
            return None;
        }
        Self::from_index(x * SIZE + y)
    }

    /// Parses a square number (1-9, as shown on an empty grid) or a label.
    ///
    /// Labels match case-insensitively on the whole label first, then on a
    /// unique prefix, so `"center"` and `"top-l"` both resolve.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = s.to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        if let Some(pos) = Self::iter().find(|pos| pos.label().to_lowercase() == wanted) {
            return Some(pos);
        }
        let mut prefixed = Self::iter().filter(|pos| pos.label().to_lowercase().starts_with(&wanted));
        match (prefixed.next(), prefixed.next()) {
            (Some(pos), None) => Some(pos),
            _ => None,
        }
    }

    /// Positions whose cell is still empty.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter()
            .filter(|pos| {
                let (x, y) = pos.coords();
                can_update_cell(board, x, y)
            })
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
