//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, interpret, move_cursor};

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs an interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, wait for a key, apply it; repeat until quit.
fn run_game(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle(interpret(key, app.cursor()));
        }
    }
    Ok(())
}
