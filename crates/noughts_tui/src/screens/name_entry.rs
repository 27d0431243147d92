//! Name entry screen.

use crossterm::event::{KeyCode, KeyEvent};
use noughts::{FlowError, GameMode, NameSlot, SessionEvent, SessionView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use super::{Screen, ScreenAction};
use crate::ui;

/// State for the name entry screen.
///
/// The text itself lives in the session; this screen only tracks which
/// field has focus and the last rejection message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntryScreen {
    focus: NameSlot,
    error_message: Option<String>,
}

impl Default for NameEntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NameEntryScreen {
    /// Creates the screen with player 1's field focused.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing NameEntryScreen");
        Self {
            focus: NameSlot::One,
            error_message: None,
        }
    }

    /// Field that receives typed characters.
    pub fn focus(&self) -> NameSlot {
        self.focus
    }

    /// Message from the last rejected submission.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn edit(&mut self, view: &SessionView, change: impl FnOnce(&mut String)) -> ScreenAction {
        let mut text = view.names.get(self.focus).to_string();
        change(&mut text);
        self.error_message = None;
        ScreenAction::Dispatch(SessionEvent::EditName {
            slot: self.focus,
            text,
        })
    }

    fn slots(mode: Option<GameMode>) -> &'static [NameSlot] {
        match mode {
            Some(mode) if mode.needs_second_name() => &[NameSlot::One, NameSlot::Two],
            _ => &[NameSlot::One],
        }
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, view: &SessionView) {
        let (title, body, help) = ui::frame_layout(frame.area());
        ui::draw_title(frame, title);

        let slots = Self::slots(view.mode);
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(slots.iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Length(2));
        let form = ui::center_rect(body, 40, 2 + 3 * slots.len() as u16 + 2);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(form);

        let subtitle = match view.mode {
            Some(mode) if mode.needs_second_name() => format!("{mode} - Enter Player Names"),
            Some(mode) => format!("{mode} - Enter Player Name"),
            None => "Enter Player Name".to_string(),
        };
        let subtitle = Paragraph::new(subtitle)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(subtitle, rows[0]);

        for (i, slot) in slots.iter().enumerate() {
            let text = view.names.get(*slot);
            let focused = *slot == self.focus;
            let (content, style) = if text.is_empty() {
                (slot.placeholder(), Style::default().fg(Color::DarkGray))
            } else if focused {
                (text, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                (text, Style::default())
            };
            let border = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let field = Paragraph::new(content).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(slot.placeholder()),
            );
            frame.render_widget(field, rows[i + 1]);
        }

        let error = Paragraph::new(self.error_message.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, rows[slots.len() + 1]);

        let help_text = if slots.len() > 1 {
            "Type name | Tab: Switch field | Enter: Start | Esc: Back"
        } else {
            "Type name | Enter: Start | Esc: Back"
        };
        ui::draw_help(frame, help, help_text);
    }

    #[instrument(skip_all)]
    fn handle_key(&mut self, key: KeyEvent, view: &SessionView) -> ScreenAction {
        match key.code {
            KeyCode::Char(c) => self.edit(view, |text| text.push(c)),
            KeyCode::Backspace => self.edit(view, |text| {
                text.pop();
            }),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                if Self::slots(view.mode).len() > 1 {
                    self.focus = self.focus.other();
                }
                ScreenAction::Stay
            }
            KeyCode::Enter => ScreenAction::Dispatch(SessionEvent::SubmitNames),
            KeyCode::Esc => ScreenAction::Dispatch(SessionEvent::Back),
            _ => ScreenAction::Stay,
        }
    }

    fn rejected(&mut self, error: &FlowError) {
        if let FlowError::InvalidNameSubmission { mode } = error {
            let message = if mode.needs_second_name() {
                "Both players need a name"
            } else {
                "Player 1 needs a name"
            };
            self.error_message = Some(message.to_string());
        }
    }
}
