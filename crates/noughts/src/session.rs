//! Flow controller: menu, name entry and play.
//!
//! A [`Session`] owns all state for one sitting at the keyboard. The
//! rendering layer feeds it [`SessionEvent`]s and reads back a
//! [`SessionView`]. Every successful mutation bumps a generation counter,
//! which keys the deferred computer move: an [`AiTicket`] from an older
//! generation is discarded when it fires.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::ai::Opponent;
use crate::error::FlowError;
use crate::names::{DEFAULT_AI_LABEL, NameSlot, PlayerNames};
use crate::status::status_text;
use crate::{Game, GameMode, Move, MoveSource, Outcome, Player, Position};

/// Screen-level phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Choosing between PvP and AI.
    #[strum(to_string = "mode select")]
    MenuSelect,
    /// Typing player names.
    #[strum(to_string = "name entry")]
    NameEntry,
    /// A game is undecided.
    #[strum(to_string = "play")]
    Playing,
    /// The game on screen is won or drawn.
    #[strum(to_string = "finished game")]
    Finished,
}

/// Input vocabulary of the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Pick a mode from the menu.
    ChooseMode(GameMode),
    /// Replace the text of a name field.
    EditName {
        /// Field being edited.
        slot: NameSlot,
        /// Full new contents of the field.
        text: String,
    },
    /// Confirm the names and start playing.
    SubmitNames,
    /// Click on a cell (0-8).
    ClickCell(usize),
    /// Clear the board, keeping mode and names.
    Reset,
    /// Return to the previous screen.
    Back,
}

/// Permission for the computer to move once, tied to a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiTicket {
    generation: u64,
}

impl AiTicket {
    /// Generation this ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
enum Stage {
    MenuSelect,
    NameEntry { mode: GameMode, names: PlayerNames },
    InGame { names: PlayerNames, game: Game },
}

/// One sitting: the flow state machine plus the current game.
#[derive(Debug, Clone)]
pub struct Session {
    stage: Stage,
    ai_label: String,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session at the mode menu.
    #[instrument]
    pub fn new() -> Self {
        Self::with_ai_label(DEFAULT_AI_LABEL)
    }

    /// Creates a session that shows `ai_label` for the computer.
    #[instrument(skip(ai_label))]
    pub fn with_ai_label(ai_label: impl Into<String>) -> Self {
        Self {
            stage: Stage::MenuSelect,
            ai_label: ai_label.into(),
            generation: 0,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match &self.stage {
            Stage::MenuSelect => Phase::MenuSelect,
            Stage::NameEntry { .. } => Phase::NameEntry,
            Stage::InGame { game, .. } if game.outcome().is_in_progress() => Phase::Playing,
            Stage::InGame { .. } => Phase::Finished,
        }
    }

    /// Returns the chosen mode, if past the menu.
    pub fn mode(&self) -> Option<GameMode> {
        match &self.stage {
            Stage::MenuSelect => None,
            Stage::NameEntry { mode, .. } => Some(*mode),
            Stage::InGame { game, .. } => Some(game.mode()),
        }
    }

    /// Returns the names, if past the menu.
    pub fn names(&self) -> Option<&PlayerNames> {
        match &self.stage {
            Stage::MenuSelect => None,
            Stage::NameEntry { names, .. } | Stage::InGame { names, .. } => Some(names),
        }
    }

    /// Returns the current game, if playing.
    pub fn game(&self) -> Option<&Game> {
        match &self.stage {
            Stage::InGame { game, .. } => Some(game),
            _ => None,
        }
    }

    /// Label shown for the computer opponent.
    pub fn ai_label(&self) -> &str {
        &self.ai_label
    }

    /// Counter bumped by every successful mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn bump(&mut self) {
        self.generation += 1;
        debug!(generation = self.generation, phase = %self.phase(), "Session changed");
    }

    /// MenuSelect → NameEntry with `mode` fixed.
    #[instrument(skip(self))]
    pub fn choose_mode(&mut self, mode: GameMode) -> Result<(), FlowError> {
        if !matches!(self.stage, Stage::MenuSelect) {
            return Err(invalid(self.phase(), "choose a mode"));
        }
        info!(%mode, "Mode chosen");
        self.stage = Stage::NameEntry {
            mode,
            names: PlayerNames::default(),
        };
        self.bump();
        Ok(())
    }

    /// Replaces the text of a name field during name entry.
    #[instrument(skip(self, text))]
    pub fn edit_name(&mut self, slot: NameSlot, text: impl Into<String>) -> Result<(), FlowError> {
        let phase = self.phase();
        match &mut self.stage {
            Stage::NameEntry { mode, names } if slot == NameSlot::One || mode.needs_second_name() => {
                names.set(slot, text);
            }
            _ => return Err(invalid(phase, "edit a name")),
        }
        self.bump();
        Ok(())
    }

    /// NameEntry → Playing when the required names are present.
    ///
    /// # Errors
    ///
    /// [`FlowError::InvalidNameSubmission`] leaves the session in name entry.
    #[instrument(skip(self))]
    pub fn submit_names(&mut self) -> Result<(), FlowError> {
        let Stage::NameEntry { mode, names } = &self.stage else {
            return Err(invalid(self.phase(), "submit names"));
        };
        let mode = *mode;
        if !names.complete_for(mode) {
            debug!(%mode, "Name submission rejected");
            return Err(FlowError::InvalidNameSubmission { mode });
        }

        info!(%mode, "Names accepted, starting game");
        self.stage = Stage::InGame {
            names: names.clone(),
            game: Game::new(mode),
        };
        self.bump();
        Ok(())
    }

    /// Human click on a cell.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Move`] for occupied squares, decided games and
    /// clicks during the computer's turn; the board is unchanged.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, index: usize) -> Result<Move, FlowError> {
        let phase = self.phase();
        let Stage::InGame { game, .. } = &mut self.stage else {
            return Err(invalid(phase, "place a mark"));
        };
        let next = game.play_index(index, MoveSource::Human)?;
        let mov = last_move(&next)?;
        *game = next;
        self.bump();
        Ok(mov)
    }

    /// Playing/Finished → Playing with an empty board; mode and names kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), FlowError> {
        let phase = self.phase();
        let Stage::InGame { game, .. } = &mut self.stage else {
            return Err(invalid(phase, "reset the board"));
        };
        info!("Board reset");
        *game = Game::new(game.mode());
        self.bump();
        Ok(())
    }

    /// NameEntry or Playing/Finished → MenuSelect, clearing everything.
    #[instrument(skip(self))]
    pub fn back(&mut self) -> Result<(), FlowError> {
        if matches!(self.stage, Stage::MenuSelect) {
            return Err(invalid(self.phase(), "go back"));
        }
        info!(from = %self.phase(), "Back to menu");
        self.stage = Stage::MenuSelect;
        self.bump();
        Ok(())
    }

    /// Issues a ticket if the computer owes a move right now.
    ///
    /// The rendering layer waits its display delay and then passes the
    /// ticket to [`Session::play_ai_move`].
    pub fn pending_ai_move(&self) -> Option<AiTicket> {
        self.game()
            .filter(|game| game.awaiting_computer())
            .map(|_| AiTicket {
                generation: self.generation,
            })
    }

    /// Plays the computer's move if `ticket` is still current.
    ///
    /// Returns `Ok(None)` when the ticket is stale or the computer no
    /// longer owes a move; nothing changes in that case.
    #[instrument(skip(self, opponent), fields(opponent = opponent.name()))]
    pub fn play_ai_move(
        &mut self,
        ticket: AiTicket,
        opponent: &mut dyn Opponent,
    ) -> Result<Option<Move>, FlowError> {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale computer move"
            );
            return Ok(None);
        }
        let Stage::InGame { game, .. } = &mut self.stage else {
            return Ok(None);
        };
        if !game.awaiting_computer() {
            return Ok(None);
        }

        let pos = opponent.choose_move(game.board())?;
        let next = game.play(pos, MoveSource::Computer)?;
        let mov = last_move(&next)?;
        *game = next;
        self.bump();
        info!(%mov, "Computer moved");
        Ok(Some(mov))
    }

    /// Dispatches an event from the rendering layer.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: SessionEvent) -> Result<(), FlowError> {
        match event {
            SessionEvent::ChooseMode(mode) => self.choose_mode(mode),
            SessionEvent::EditName { slot, text } => self.edit_name(slot, text),
            SessionEvent::SubmitNames => self.submit_names(),
            SessionEvent::ClickCell(index) => self.click_cell(index).map(|_| ()),
            SessionEvent::Reset => self.reset(),
            SessionEvent::Back => self.back(),
        }
    }

    /// Status line while a game is on screen.
    pub fn status(&self) -> Option<String> {
        let Stage::InGame { names, game } = &self.stage else {
            return None;
        };
        Some(status_text(
            &game.outcome(),
            game.to_move(),
            names,
            game.mode(),
            &self.ai_label,
        ))
    }

    /// Snapshot of everything the rendering layer draws.
    pub fn view(&self) -> SessionView {
        let game = self.game();
        let outcome = game.map(Game::outcome);
        let cells = match game {
            Some(game) => {
                let squares = *game.board().squares();
                squares.map(|sq| sq.player())
            }
            None => [None; 9],
        };
        let highlighted = outcome
            .and_then(|o| o.winning_line())
            .map(|line| line.iter().map(|p| p.to_index()).collect())
            .unwrap_or_default();

        SessionView {
            phase: self.phase(),
            mode: self.mode(),
            names: self.names().cloned().unwrap_or_default(),
            cells,
            to_move: game.map(Game::to_move),
            outcome,
            status: self.status(),
            highlighted,
            awaiting_computer: game.is_some_and(Game::awaiting_computer),
            generation: self.generation,
        }
    }
}

/// Rejection for an event that does not apply in `phase`.
fn invalid(phase: Phase, action: &'static str) -> FlowError {
    warn!(%phase, action, "Event not valid in this phase");
    FlowError::InvalidTransition { phase, action }
}

/// The move just appended to a game's history.
fn last_move(game: &Game) -> Result<Move, FlowError> {
    game.history()
        .last()
        .copied()
        .ok_or_else(|| crate::MoveError::InvariantViolation("empty history after move".into()).into())
}

/// Serializable snapshot of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Current phase.
    pub phase: Phase,
    /// Chosen mode, once past the menu.
    pub mode: Option<GameMode>,
    /// Raw name text.
    pub names: PlayerNames,
    /// Board cells in row-major order.
    pub cells: [Option<Player>; 9],
    /// Player to move, while a game is on screen.
    pub to_move: Option<Player>,
    /// Derived outcome, while a game is on screen.
    pub outcome: Option<Outcome>,
    /// Status line, while a game is on screen.
    pub status: Option<String>,
    /// Cell indices of the winning line, if any.
    pub highlighted: Vec<usize>,
    /// Whether a computer move is owed.
    pub awaiting_computer: bool,
    /// Session generation this view was taken at.
    pub generation: u64,
}

impl SessionView {
    /// Whether cell `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.outcome.is_some_and(|outcome| outcome.highlights(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomOpponent;

    fn playing(mode: GameMode) -> Session {
        let mut session = Session::new();
        session.choose_mode(mode).unwrap();
        session.edit_name(NameSlot::One, "Ada").unwrap();
        if mode.needs_second_name() {
            session.edit_name(NameSlot::Two, "Bob").unwrap();
        }
        session.submit_names().unwrap();
        session
    }

    #[test]
    fn test_menu_to_playing() {
        let session = playing(GameMode::PlayerVsPlayer);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.status().as_deref(), Some("Ada's turn"));
    }

    #[test]
    fn test_second_name_rejected_in_ai_mode() {
        let mut session = Session::new();
        session.choose_mode(GameMode::PlayerVsAi).unwrap();
        let before = session.generation();
        assert!(matches!(
            session.edit_name(NameSlot::Two, "Bob"),
            Err(FlowError::InvalidTransition { .. })
        ));
        assert_eq!(session.generation(), before);
    }

    #[test]
    fn test_stale_ticket_discarded_after_reset() {
        let mut session = playing(GameMode::PlayerVsAi);
        session.click_cell(0).unwrap();
        let ticket = session.pending_ai_move().expect("computer owes a move");

        session.reset().unwrap();
        let mut opponent = RandomOpponent::new(Some(9));
        assert_eq!(session.play_ai_move(ticket, &mut opponent), Ok(None));
        assert_eq!(session.game().unwrap().board().mark_count(), 0);
    }

    #[test]
    fn test_ticket_used_once() {
        let mut session = playing(GameMode::PlayerVsAi);
        session.click_cell(4).unwrap();
        let ticket = session.pending_ai_move().unwrap();
        let mut opponent = RandomOpponent::new(Some(9));

        assert!(session.play_ai_move(ticket, &mut opponent).unwrap().is_some());
        assert_eq!(session.play_ai_move(ticket, &mut opponent), Ok(None));
        assert_eq!(session.game().unwrap().board().mark_count(), 2);
    }

    #[test]
    fn test_view_highlights_winning_line() {
        let mut session = playing(GameMode::PlayerVsPlayer);
        for idx in [0, 3, 1, 4, 2] {
            session.click_cell(idx).unwrap();
        }
        let view = session.view();
        assert_eq!(view.phase, Phase::Finished);
        assert_eq!(view.highlighted, vec![0, 1, 2]);
        assert!(view.is_highlighted(Position::TopCenter));
        assert!(!view.is_highlighted(Position::MiddleLeft));
        assert_eq!(view.status.as_deref(), Some("Ada wins!"));
    }
}
