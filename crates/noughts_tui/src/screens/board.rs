//! Game board screen.

use crossterm::event::{KeyCode, KeyEvent};
use noughts::{Phase, Position, SessionEvent, SessionView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use super::{Screen, ScreenAction};
use crate::input::{digit_cell, move_cursor};
use crate::ui;

/// State for the board screen: just the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardScreen {
    cursor: Position,
}

impl Default for BoardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardScreen {
    /// Creates the screen with the cursor on the centre cell.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing BoardScreen");
        Self {
            cursor: Position::Center,
        }
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }
}

impl Screen for BoardScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, view: &SessionView) {
        let (title, body, help) = ui::frame_layout(frame.area());
        ui::draw_title(frame, title);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(11), Constraint::Length(3)])
            .split(body);

        let human_turn = view.phase == Phase::Playing && !view.awaiting_computer;
        ui::draw_board(frame, chunks[0], view, human_turn.then_some(self.cursor));

        let status_style = if view.phase == Phase::Finished {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mode = view.mode.map(|m| m.to_string()).unwrap_or_default();
        let status = Paragraph::new(view.status.as_deref().unwrap_or(""))
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(mode));
        frame.render_widget(status, chunks[1]);

        ui::draw_help(
            frame,
            help,
            "←↑↓→: Move | Enter/1-9: Place | r: Reset | b: Back | q: Quit",
        );
    }

    #[instrument(skip_all, fields(key = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent, _view: &SessionView) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenAction::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                ScreenAction::Dispatch(SessionEvent::ClickCell(self.cursor.to_index()))
            }
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenAction::Dispatch(SessionEvent::Reset),
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => {
                ScreenAction::Dispatch(SessionEvent::Back)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
            code => match digit_cell(code) {
                Some(idx) => {
                    if let Some(pos) = Position::from_index(idx) {
                        self.cursor = pos;
                    }
                    ScreenAction::Dispatch(SessionEvent::ClickCell(idx))
                }
                None => ScreenAction::Stay,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::Session;

    #[test]
    fn test_enter_clicks_cursor_cell() {
        let view = Session::new().view();
        let mut screen = BoardScreen::new();
        screen.handle_key(KeyEvent::from(KeyCode::Up), &view);
        screen.handle_key(KeyEvent::from(KeyCode::Left), &view);
        assert_eq!(screen.cursor(), Position::TopLeft);
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Enter), &view),
            ScreenAction::Dispatch(SessionEvent::ClickCell(0))
        );
    }

    #[test]
    fn test_digit_clicks_and_moves_cursor() {
        let view = Session::new().view();
        let mut screen = BoardScreen::new();
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Char('9')), &view),
            ScreenAction::Dispatch(SessionEvent::ClickCell(8))
        );
        assert_eq!(screen.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_reset_back_quit_keys() {
        let view = Session::new().view();
        let mut screen = BoardScreen::new();
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Char('r')), &view),
            ScreenAction::Dispatch(SessionEvent::Reset)
        );
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Esc), &view),
            ScreenAction::Dispatch(SessionEvent::Back)
        );
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Char('q')), &view),
            ScreenAction::Quit
        );
    }
}
