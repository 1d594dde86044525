//! Stateless rendering of the app.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tris::{Board, Cell, Marker, Position};

use super::app::{App, Screen};
use super::input::Field;

/// Renders the whole app.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Tris")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = match app.screen() {
        Screen::NameEntry => {
            draw_form(frame, chunks[1], app);
            "Tab: switch field | Enter: start | Esc: quit"
        }
        Screen::Playing => {
            draw_board(frame, chunks[1], app.view(), *app.cursor());
            "Arrows: move | Enter/Space or 1-9: play | r: reset | q: quit"
        }
    };

    let status = Paragraph::new(app.status().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_area = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form_area);

    for (row, field, label) in [
        (rows[0], Field::First, "Player 1 (X)"),
        (rows[1], Field::Second, "Player 2 (O)"),
    ] {
        let focused = app.form().focus() == field;
        let border = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut text = app.form().name(field).to_string();
        if focused {
            text.push('_');
        }
        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label),
        );
        frame.render_widget(input, row);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 23, 5);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(board_area);

    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for column in 0..3 {
            if let Some(pos) = Position::from_row_column(row, column) {
                spans.push(cell_span(board, cursor, pos));
            }
            if column < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            rows[row * 2],
        );
        if row < 2 {
            frame.render_widget(
                Paragraph::new("───────┼───────┼───────")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                rows[row * 2 + 1],
            );
        }
    }
}

fn cell_span(board: &Board, cursor: Position, pos: Position) -> Span<'static> {
    let (symbol, base_style) = match board.get(pos.to_index()).unwrap_or_default() {
        Cell::Empty => (
            format!("   {}   ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Marker::X) => (
            "   X   ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Marker::O) => (
            "   O   ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
