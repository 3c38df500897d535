//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Player, Position};

/// Renders the title, the board with cursor highlight, and the status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move · enter/1-9 play · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in Position::ALL.chunks(3).zip([rows[0], rows[2], rows[4]]) {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (pos, col) in positions.iter().zip([cols[0], cols[2], cols[4]]) {
        draw_cell(frame, col, app, *pos);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (x, y) = pos.coords();
    let cell = app.state().board().get(x, y).unwrap_or_default();

    let (symbol, base_style) = match cell {
        Cell::Empty if app.show_hints() => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() && !app.state().winner().is_finished() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in the 3-line row.
    let middle = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, middle);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
