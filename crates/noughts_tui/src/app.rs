//! App controller: routes keys to screens and events to the session.

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::{FlowError, Phase, RandomOpponent, Session, SessionEvent, SessionView};
use ratatui::{Frame, Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

use crate::config::Settings;
use crate::scheduler::AiScheduler;
use crate::screens::{BoardScreen, MenuScreen, NameEntryScreen, Screen, ScreenAction};

/// Screen currently on display.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    NameEntry(NameEntryScreen),
    Board(BoardScreen),
}

impl ActiveScreen {
    fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::MenuSelect => Self::Menu(MenuScreen::new()),
            Phase::NameEntry => Self::NameEntry(NameEntryScreen::new()),
            Phase::Playing | Phase::Finished => Self::Board(BoardScreen::new()),
        }
    }

    fn shows(&self, phase: Phase) -> bool {
        matches!(
            (self, phase),
            (Self::Menu(_), Phase::MenuSelect)
                | (Self::NameEntry(_), Phase::NameEntry)
                | (Self::Board(_), Phase::Playing | Phase::Finished)
        )
    }

    fn screen(&self) -> &dyn Screen {
        match self {
            Self::Menu(s) => s,
            Self::NameEntry(s) => s,
            Self::Board(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Menu(s) => s,
            Self::NameEntry(s) => s,
            Self::Board(s) => s,
        }
    }
}

/// The terminal app: one [`Session`], its screens and the computer's timer.
#[derive(Debug)]
pub struct App {
    session: Session,
    opponent: RandomOpponent,
    scheduler: AiScheduler,
    screen: ActiveScreen,
}

impl App {
    /// Creates the app at the mode menu.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        info!(
            ai_delay_ms = settings.ai_delay_ms(),
            seed = ?settings.seed(),
            "Creating App"
        );
        Self {
            session: Session::with_ai_label(settings.ai_label().clone()),
            opponent: RandomOpponent::new(*settings.seed()),
            scheduler: AiScheduler::new(settings.ai_delay()),
            screen: ActiveScreen::for_phase(Phase::MenuSelect),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The computer's timer.
    pub fn scheduler(&self) -> &AiScheduler {
        &self.scheduler
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        let view = self.session.view();
        self.screen.screen().render(frame, &view);
    }

    /// Handles one key press. Returns `false` when the app should quit.
    #[instrument(skip(self, key), fields(key = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        let view = self.session.view();
        match self.screen.screen_mut().handle_key(key, &view) {
            ScreenAction::Stay => true,
            ScreenAction::Quit => false,
            ScreenAction::Dispatch(event) => {
                self.dispatch(event);
                true
            }
        }
    }

    /// Forwards an event to the session and brings screen and timer in line.
    ///
    /// Rejected events leave the session unchanged; the active screen is
    /// told so it can show a message.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: SessionEvent) {
        match self.session.handle(event) {
            Ok(()) => {}
            Err(FlowError::Move(e)) => debug!(error = %e, "Move ignored"),
            Err(e) => {
                debug!(error = %e, "Event rejected");
                self.screen.screen_mut().rejected(&e);
            }
        }
        self.sync();
    }

    /// Plays every computer move whose delay has elapsed.
    ///
    /// Returns how many tickets were redeemed, stale ones included.
    pub fn poll_ai(&mut self) -> usize {
        let mut redeemed = 0;
        while let Some(ticket) = self.scheduler.try_next() {
            redeemed += 1;
            match self.session.play_ai_move(ticket, &mut self.opponent) {
                Ok(Some(mov)) => debug!(%mov, "Computer move applied"),
                Ok(None) => debug!(generation = ticket.generation(), "Stale ticket dropped"),
                Err(e) => error!(error = %e, "Computer move failed"),
            }
            self.sync();
        }
        redeemed
    }

    fn sync(&mut self) {
        let phase = self.session.phase();
        if !self.screen.shows(phase) {
            debug!(%phase, "Switching screen");
            self.screen = ActiveScreen::for_phase(phase);
        }
        match self.session.pending_ai_move() {
            Some(ticket) => self.scheduler.schedule(ticket),
            None => self.scheduler.cancel(),
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
                && key.kind != KeyEventKind::Release
                && !self.handle_key(key)
            {
                info!("Quitting");
                return Ok(());
            }

            self.poll_ai();
            sleep(Duration::from_millis(10)).await;
        }
    }
}

/// Sets up the terminal, runs the app and restores the terminal.
#[instrument(skip(settings))]
pub async fn run_tui(settings: &Settings) -> anyhow::Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "TUI exited with error");
    }
    res
}
