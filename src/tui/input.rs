//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::{Position, SIZE};

/// What a key press means to the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor to a new square.
    Cursor(Position),
    /// Play at the given square.
    Play(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (x, y) = cursor.coords();
    let (x, y) = match key {
        KeyCode::Up => (x.saturating_sub(1), y),
        KeyCode::Down => ((x + 1).min(SIZE - 1), y),
        KeyCode::Left => (x, y.saturating_sub(1)),
        KeyCode::Right => (x, (y + 1).min(SIZE - 1)),
        _ => (x, y),
    };
    Position::from_coords(x, y).unwrap_or(cursor)
}

/// Maps a key event to a command given the current cursor.
pub fn interpret(key: KeyEvent, cursor: Position) -> Command {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Play(cursor),
        KeyCode::Char(c) if c.is_ascii_digit() => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map_or(Command::Ignore, Command::Play),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Command::Cursor(move_cursor(cursor, code))
        }
        _ => Command::Ignore,
    }
}
