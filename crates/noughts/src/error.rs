//! Flow controller errors.

use crate::{AiError, GameMode, MoveError, Phase};

/// Error returned when the flow controller rejects an event.
///
/// Every variant is recoverable: the session is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum FlowError {
    /// Required names are blank (after trimming) for the chosen mode.
    #[display("Player names incomplete for {}", mode)]
    #[from(ignore)]
    InvalidNameSubmission {
        /// Mode the names were submitted for.
        mode: GameMode,
    },

    /// The event does not apply to the current phase.
    #[display("Cannot {} during {}", action, phase)]
    #[from(ignore)]
    InvalidTransition {
        /// Phase the session was in.
        phase: Phase,
        /// What was attempted.
        action: &'static str,
    },

    /// A move was rejected by the game.
    #[display("{}", _0)]
    Move(MoveError),

    /// The computer could not choose a move.
    #[display("{}", _0)]
    Ai(AiError),
}
