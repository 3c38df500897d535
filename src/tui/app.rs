//! Application state for the terminal front end.

use super::input::Command;
use crate::config::TuiConfig;
use crate::replay::status_line;
use tictactoe_engine::{Action, ApplicationState, Position, transition};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    state: ApplicationState,
    cursor: Position,
    status_message: String,
    show_hints: bool,
    running: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        let state = ApplicationState::initial();
        Self {
            status_message: status_line(&state),
            state,
            cursor: Position::Center,
            show_hints: *config.show_hints(),
            running: true,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether empty cells show their square numbers.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies a decoded key command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Cursor(pos) => self.cursor = pos,
            Command::Play(pos) => self.play(pos),
            Command::Restart => self.restart(),
            Command::Quit => self.running = false,
            Command::Ignore => {}
        }
    }

    fn play(&mut self, pos: Position) {
        let (x, y) = pos.coords();
        let next = transition(&self.state, Action::Move { x, y });
        if next == self.state {
            self.status_message = if self.state.winner().is_finished() {
                format!("{} Press 'r' to restart or 'q' to quit.", status_line(&self.state))
            } else {
                format!("{} is taken. {}", pos.label(), status_line(&self.state))
            };
            return;
        }

        debug!(position = %pos, player = %self.state.current_player(), "Move applied to UI state");
        self.state = next;
        self.cursor = pos;
        self.status_message = if self.state.winner().is_finished() {
            format!("{} Press 'r' to restart or 'q' to quit.", status_line(&self.state))
        } else {
            status_line(&self.state)
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.state = transition(&self.state, Action::Restart);
        self.cursor = Position::Center;
        self.status_message = status_line(&self.state);
    }
}
