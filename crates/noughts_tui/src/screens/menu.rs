//! Mode selection menu.

use crossterm::event::{KeyCode, KeyEvent};
use noughts::{GameMode, SessionEvent, SessionView};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use super::{Screen, ScreenAction};
use crate::ui;

/// State for the mode menu.
#[derive(Debug, Clone)]
pub struct MenuScreen {
    modes: Vec<GameMode>,
    list_state: ListState,
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScreen {
    /// Creates the menu with the first mode selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MenuScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            modes: GameMode::iter().collect(),
            list_state,
        }
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.modes.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.modes.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the highlighted mode.
    pub fn selected(&self) -> GameMode {
        let idx = self.list_state.selected().unwrap_or(0);
        self.modes[idx.min(self.modes.len() - 1)]
    }
}

impl Screen for MenuScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _view: &SessionView) {
        let (title, body, help) = ui::frame_layout(frame.area());
        ui::draw_title(frame, title);

        let items: Vec<ListItem> = self
            .modes
            .iter()
            .map(|mode| ListItem::new(mode.to_string()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Choose Game Mode"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, ui::center_rect(body, 40, 4), &mut list_state);

        ui::draw_help(frame, help, "↑↓: Navigate | Enter: Select | q: Quit");
    }

    #[instrument(skip_all)]
    fn handle_key(&mut self, key: KeyEvent, _view: &SessionView) -> ScreenAction {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenAction::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenAction::Stay
            }
            KeyCode::Enter => {
                let mode = self.selected();
                info!(%mode, "Mode selected");
                ScreenAction::Dispatch(SessionEvent::ChooseMode(mode))
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::Session;

    #[test]
    fn test_selection_wraps() {
        let view = Session::new().view();
        let mut menu = MenuScreen::new();
        assert_eq!(menu.selected(), GameMode::PlayerVsPlayer);

        menu.handle_key(KeyEvent::from(KeyCode::Up), &view);
        assert_eq!(menu.selected(), GameMode::PlayerVsAi);
        menu.handle_key(KeyEvent::from(KeyCode::Down), &view);
        assert_eq!(menu.selected(), GameMode::PlayerVsPlayer);
    }

    #[test]
    fn test_enter_chooses_highlighted_mode() {
        let view = Session::new().view();
        let mut menu = MenuScreen::new();
        menu.handle_key(KeyEvent::from(KeyCode::Down), &view);
        assert_eq!(
            menu.handle_key(KeyEvent::from(KeyCode::Enter), &view),
            ScreenAction::Dispatch(SessionEvent::ChooseMode(GameMode::PlayerVsAi))
        );
    }
}
