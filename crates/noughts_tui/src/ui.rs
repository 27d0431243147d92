//! Shared rendering pieces: frame layout, title and board.

use noughts::{Player, Position, SessionView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Title shown on every screen.
pub const TITLE: &str = "Noughts - Tic Tac Toe";

/// Splits the frame into title, body and help bar.
pub fn frame_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Body
            Constraint::Length(3), // Help
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draws the title bar.
pub fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// Draws the key help bar.
pub fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Draws the 3x3 board centred in `area`.
///
/// `cursor` is highlighted while a human may move; the winning line is
/// highlighted once the game is won.
pub fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Option<Position>) {
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

    for (positions, row) in Position::ALL.chunks(3).zip([rows[0], rows[2], rows[4]]) {
        draw_row(frame, row, positions, view, cursor);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    positions: &[Position],
    view: &SessionView,
    cursor: Option<Position>,
) {
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
        draw_cell(frame, col, view, cursor, *pos);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Option<Position>, pos: Position) {
    let (symbol, base_style) = match view.cells[pos.to_index()] {
        None => (format!(" {} ", pos.to_index() + 1), Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (" X ".to_string(), Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => (" O ".to_string(), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if view.is_highlighted(pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Returns a `width` x `height` rectangle centred in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let inner = center_rect(area, 40, 11);
        assert_eq!(inner, Rect::new(20, 6, 40, 11));
    }

    #[test]
    fn test_center_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let inner = center_rect(area, 40, 11);
        assert!(inner.width <= 20 && inner.height <= 5);
    }
}
