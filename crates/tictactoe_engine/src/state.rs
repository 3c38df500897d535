//! Application state machine.
//!
//! A front end keeps one [`ApplicationState`] and feeds every user action
//! through [`transition`], which returns the next state. Nothing here is
//! mutated in place, so earlier states stay valid for as long as the
//! caller keeps them.

use crate::engine::{can_update_cell, get_winner, update_board};
use crate::types::{Board, Cell, GameState, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Mark `(x, y)` for the current player.
    Move {
        /// Row.
        x: usize,
        /// Column.
        y: usize,
    },
    /// Discard the game and start over.
    Restart,
}

/// Everything a view needs to render a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationState {
    board: Board,
    current_player: Player,
    winner: GameState,
}

impl ApplicationState {
    /// Empty board, X to move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            winner: GameState::Continue,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the classification of the board.
    pub fn winner(&self) -> GameState {
        self.winner
    }

    /// Folds a sequence of moves over this state.
    pub fn apply_moves(self, moves: impl IntoIterator<Item = (usize, usize)>) -> Self {
        moves
            .into_iter()
            .fold(self, |state, (x, y)| transition(&state, Action::Move { x, y }))
    }
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Computes the state that follows `action`.
///
/// Moves on occupied or out-of-range cells, and any move after the game has
/// finished, leave the state unchanged.
#[instrument(skip(state), fields(player = %state.current_player))]
pub fn transition(state: &ApplicationState, action: Action) -> ApplicationState {
    match action {
        Action::Move { x, y } => {
            if state.winner.is_finished() {
                debug!(x, y, "Ignoring move after game over");
                return *state;
            }
            if !can_update_cell(&state.board, x, y) {
                debug!(x, y, "Ignoring illegal move");
                return *state;
            }

            let board = match update_board(&state.board, x, y, Cell::Occupied(state.current_player)) {
                Ok(board) => board,
                Err(e) => {
                    warn!(error = %e, "Board update failed after legality check");
                    return *state;
                }
            };
            let winner = get_winner(&board);
            if let GameState::Finished(outcome) = winner {
                info!(%outcome, "Game finished");
            }

            ApplicationState {
                board,
                current_player: state.current_player.opponent(),
                winner,
            }
        }
        Action::Restart => {
            info!("Restarting game");
            ApplicationState::initial()
        }
    }
}
