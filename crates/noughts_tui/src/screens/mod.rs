//! Screen trait and the screens of the terminal app.

mod board;
mod menu;
mod name_entry;

pub use board::BoardScreen;
pub use menu::MenuScreen;
pub use name_entry::NameEntryScreen;

use crossterm::event::KeyEvent;
use noughts::{FlowError, SessionEvent, SessionView};
use ratatui::Frame;

/// The result of handling a key on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing for the session to do.
    Stay,
    /// Forward an event to the session.
    Dispatch(SessionEvent),
    /// Exit the app.
    Quit,
}

/// Trait implemented by each screen.
///
/// Screens hold only presentation state (menu selection, cursor, focused
/// field). Everything else is read from the [`SessionView`].
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, view: &SessionView);

    /// Handles a key event and returns the resulting [`ScreenAction`].
    fn handle_key(&mut self, key: KeyEvent, view: &SessionView) -> ScreenAction;

    /// Called when the session rejects an event this screen dispatched.
    fn rejected(&mut self, _error: &FlowError) {}
}
