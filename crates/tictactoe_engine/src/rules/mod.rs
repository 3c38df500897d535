//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Kept apart from the board type so
//! the engine and the application state machine can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
