//! Non-interactive replay of a move list.

use derive_more::{Display, Error};
use tictactoe_engine::{Action, ApplicationState, GameState, Position, transition};
use tracing::{info, instrument, warn};

/// A move string that is neither `x,y` nor a square number.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse move {:?}: expected `x,y` or a square number 1-9", input)]
pub struct MoveParseError {
    /// The rejected text.
    pub input: String,
}

/// Parses `x,y` coordinates or a square number 1-9.
///
/// Coordinates are not range-checked here; the state machine ignores moves
/// that fall off the board.
#[instrument]
pub fn parse_move(input: &str) -> Result<(usize, usize), MoveParseError> {
    let err = || MoveParseError {
        input: input.to_string(),
    };

    if let Some((x, y)) = input.split_once(',') {
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        return Ok((x, y));
    }

    Position::from_label_or_number(input)
        .map(Position::coords)
        .ok_or_else(err)
}

/// Outcome of replaying a move list.
#[derive(Debug, Clone)]
pub struct Replay {
    /// State after the last move.
    pub state: ApplicationState,
    /// Moves that did not change the state, with their 1-based ordinal.
    pub rejected: Vec<(usize, (usize, usize))>,
}

/// Runs `moves` through the state machine starting from a fresh game.
#[instrument(skip(moves))]
pub fn replay(moves: &[(usize, usize)]) -> Replay {
    let mut state = ApplicationState::initial();
    let mut rejected = Vec::new();

    for (ordinal, &(x, y)) in moves.iter().enumerate() {
        let next = transition(&state, Action::Move { x, y });
        if next == state {
            warn!(move_number = ordinal + 1, x, y, "Move rejected");
            rejected.push((ordinal + 1, (x, y)));
        }
        state = next;
    }

    info!(moves = moves.len(), rejected = rejected.len(), "Replay complete");
    Replay { state, rejected }
}

/// One-line description of where the game stands.
pub fn status_line(state: &ApplicationState) -> String {
    match state.winner() {
        GameState::Continue => format!("Player: {}", state.current_player()),
        GameState::Finished(outcome) => outcome.to_string(),
    }
}
