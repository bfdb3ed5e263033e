use crate::game::{Cell, GameEngine, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    theme: &Theme,
    selected_column: usize,
    last_drop: Option<(usize, usize)>,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Header
            Constraint::Min(engine.rows() as u16 + 4),       // Board
            Constraint::Length(3),                           // Message
            Constraint::Length(3),                           // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, theme, chunks[0]);
    render_board(frame, engine, theme, selected_column, last_drop, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    engine: &GameEngine,
    theme: &Theme,
    area: ratatui::layout::Rect,
) {
    let (text, color) = match engine.status() {
        GameStatus::InProgress => {
            let style = theme.style(engine.current_player());
            (format!("Current Player: {}", style.name), style.color)
        }
        GameStatus::Won(winner) => {
            let style = theme.style(winner);
            (format!("Game Over — {} wins", style.name), style.color)
        }
        GameStatus::Draw => ("Game Over — draw".to_string(), Color::Gray),
    };

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    theme: &Theme,
    selected_column: usize,
    last_drop: Option<(usize, usize)>,
    area: ratatui::layout::Rect,
) {
    let cols = engine.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    // Borders sized to the configured width
    let span = "═".repeat(3 * cols + 1);
    lines.push(Line::from(format!("  ╔{span}╗")));

    for row in 0..engine.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let (symbol, mut style) = match engine.cell(row, col) {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::Taken(id) => (
                    " \u{25cf} ",
                    Style::default().fg(theme.style(id).color),
                ),
            };
            // The freshly landed piece, straight from the move outcome.
            if last_drop == Some((row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{span}╝")));

    // Selection indicator under the board
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
