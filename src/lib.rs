//! Terminal tic-tac-toe.
//!
//! The game rules live in [`tictactoe_engine`]; this crate is the view
//! layer around them: configuration, a non-interactive replay command and
//! an interactive terminal UI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
pub mod tui;

pub use config::{ConfigError, TuiConfig};
pub use replay::{MoveParseError, Replay, parse_move, replay, status_line};
