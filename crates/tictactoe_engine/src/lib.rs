//! Pure tic-tac-toe game-state engine.
//!
//! The engine owns no state. Boards are small `Copy` values; every
//! operation takes a board and hands back a new value:
//!
//! - [`empty_cell`] builds the initial cell value.
//! - [`can_update_cell`] gates a move on per-cell occupancy.
//! - [`update_board`] replaces one cell, leaving the input untouched.
//! - [`get_winner`] classifies a board as running, won or drawn.
//!
//! [`transition`] layers a small state machine on top for front ends that
//! dispatch `Move`/`Restart` actions.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{
//!     Board, Cell, GameOutcome, GameState, Player, can_update_cell, get_winner, update_board,
//! };
//!
//! let mut board = Board::new();
//! for y in 0..3 {
//!     assert!(can_update_cell(&board, 0, y));
//!     board = update_board(&board, 0, y, Cell::Occupied(Player::X)).unwrap();
//! }
//! assert_eq!(get_winner(&board), GameState::Finished(GameOutcome::Winner(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod state;
mod types;

pub use engine::{can_update_cell, empty_cell, get_winner, place, update_board};
pub use error::EngineError;
pub use position::Position;
pub use state::{Action, ApplicationState, transition};
pub use types::{Board, Cell, GameOutcome, GameState, Player, SIZE};
