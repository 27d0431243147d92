//! Noughts - tic-tac-toe game logic and menu flow.
//!
//! Pure, single-threaded core for a two-mode tic-tac-toe: two people at
//! one keyboard, or one person against a computer that plays a uniformly
//! random empty square.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] turns a [`Board`] into an [`Outcome`]
//! - **Game**: immutable [`Game`] snapshots advanced by [`Game::play`]
//! - **Opponent**: [`RandomOpponent`] behind the [`Opponent`] trait
//! - **Session**: the menu → names → play flow, driven by [`SessionEvent`]s
//!
//! # Example
//!
//! ```
//! use noughts::{GameMode, NameSlot, Phase, Session};
//!
//! let mut session = Session::new();
//! session.choose_mode(GameMode::PlayerVsPlayer).unwrap();
//! session.edit_name(NameSlot::One, "Ada").unwrap();
//! session.edit_name(NameSlot::Two, "Bob").unwrap();
//! session.submit_names().unwrap();
//!
//! session.click_cell(4).unwrap();
//! assert_eq!(session.phase(), Phase::Playing);
//! assert_eq!(session.status().as_deref(), Some("Bob's turn"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod error;
mod game;
pub mod invariants;
mod mode;
mod names;
mod outcome;
mod position;
pub mod rules;
mod session;
mod status;
mod types;

pub use action::{Move, MoveError, MoveSource};
pub use ai::{AiError, Opponent, RandomOpponent, choose_ai_move};
pub use error::FlowError;
pub use game::{Game, apply_move};
pub use mode::GameMode;
pub use names::{DEFAULT_AI_LABEL, NameSlot, PlayerNames};
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use rules::evaluate;
pub use session::{AiTicket, Phase, Session, SessionEvent, SessionView};
pub use status::status_text;
pub use types::{Board, Player, Square};
