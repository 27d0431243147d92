//! Computer opponent.
//!
//! The opponent picks uniformly at random among the empty squares. It is
//! deliberately beatable; there is no search.

use rand::prelude::*;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::{Board, Position, rules};

/// Error raised when the computer is asked to move with no legal move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AiError {
    /// The board already has a winner or is drawn.
    #[display("Cannot choose a move: game is already decided")]
    GameDecided,
    /// No empty square remains.
    #[display("Cannot choose a move: no empty squares")]
    NoEmptySquare,
}

impl std::error::Error for AiError {}

/// Picks a uniformly random empty square using `rng`.
///
/// # Errors
///
/// Fails if the board is decided or full.
#[instrument(skip(board, rng))]
pub fn choose_ai_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, AiError> {
    if !rules::evaluate(board).is_in_progress() {
        return Err(AiError::GameDecided);
    }
    let empty = board.empty_positions();
    let pos = empty.choose(rng).copied().ok_or(AiError::NoEmptySquare)?;
    debug!(position = %pos, candidates = empty.len(), "Computer chose position");
    Ok(pos)
}

/// Something that can choose moves for the computer-controlled mark.
pub trait Opponent {
    /// Returns the opponent's name for logs.
    fn name(&self) -> &str;

    /// Chooses a move on `board`.
    fn choose_move(&mut self, board: &Board) -> Result<Position, AiError>;
}

/// Opponent that plays a uniformly random empty square.
///
/// Seeded instances are reproducible, which tests rely on.
#[derive(Debug)]
pub struct RandomOpponent {
    name: String,
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates a new random opponent.
    ///
    /// `Some(seed)` gives reproducible play; `None` draws from OS entropy.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: "RandomOpponent".to_string(),
            rng,
        }
    }
}

impl Opponent for RandomOpponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board) -> Result<Position, AiError> {
        choose_ai_move(board, &mut self.rng)
    }
}
