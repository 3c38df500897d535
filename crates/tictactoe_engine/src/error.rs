//! Error types for the engine.

use derive_more::{Display, Error};

/// Error returned when a board operation cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Coordinates outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are outside the board", x, y)]
    OutOfRange {
        /// Row.
        x: usize,
        /// Column.
        y: usize,
    },

    /// The cell already carries a mark.
    #[display("Cell ({}, {}) is already occupied", x, y)]
    CellOccupied {
        /// Row.
        x: usize,
        /// Column.
        y: usize,
    },

    /// Text could not be parsed as a board.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(#[error(not(source))] String),
}
