//! Game state machine for a single round of tic-tac-toe.
//!
//! A [`Game`] is an immutable snapshot: every accepted move returns a new
//! game and leaves the old one untouched. The outcome is never stored; it
//! is recomputed from the board with [`rules::evaluate`].

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::action::{Move, MoveError, MoveSource};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::mode::GameMode;
use crate::outcome::Outcome;
use crate::rules;
use crate::{Board, Player, Position, Square};

/// Places `turn`'s mark at `pos` and flips the turn.
///
/// Rejects occupied squares and boards that are already decided. This is
/// the only place a square changes from empty to occupied.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, turn: Player, pos: Position) -> Result<(Board, Player), MoveError> {
    if !rules::evaluate(board).is_in_progress() {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    let mut next = board.clone();
    next.set(pos, Square::Occupied(turn));
    Ok((next, turn.opponent()))
}

/// One round of play: mode, board, turn and move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Game {
    #[getter(skip)]
    pub(crate) mode: GameMode,
    pub(crate) board: Board,
    #[getter(skip)]
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a fresh game with an empty board and X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the mode this game is played in.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns who is expected to move next.
    pub fn mover(&self) -> MoveSource {
        self.mode.controller_of(self.to_move)
    }

    /// Whether the computer opponent owes a move right now.
    ///
    /// True only in AI mode, on the computer's turn, while the game is
    /// undecided and a square is free.
    pub fn awaiting_computer(&self) -> bool {
        self.mover() == MoveSource::Computer
            && self.outcome().is_in_progress()
            && self.board.mark_count() < 9
    }

    /// Applies a move from `source`, returning the next snapshot.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board is decided
    /// - [`MoveError::NotYourTurn`] if `source` does not control the mark to move
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(to_move = %self.to_move, mode = %self.mode))]
    pub fn play(&self, pos: Position, source: MoveSource) -> Result<Game, MoveError> {
        if !self.outcome().is_in_progress() {
            return Err(MoveError::GameOver);
        }
        if self.mover() != source {
            debug!(expected = ?self.mover(), "Move from wrong source");
            return Err(MoveError::NotYourTurn(source));
        }

        let (board, to_move) = apply_move(&self.board, self.to_move, pos)?;
        let mut history = self.history.clone();
        history.push(Move::new(self.to_move, pos));

        let next = Game {
            mode: self.mode,
            board,
            to_move,
            history,
        };

        if cfg!(debug_assertions) {
            verify_invariants(&next)?;
        }

        debug!(position = %pos, outcome = %next.outcome(), "Move applied");
        Ok(next)
    }

    /// Applies a move given as a raw cell index (0-8).
    #[instrument(skip(self))]
    pub fn play_index(&self, index: usize, source: MoveSource) -> Result<Game, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos, source)
    }

    /// Replays positions from a fresh game, ignoring who controls each mark.
    ///
    /// Used for headless replays and tests where the computer's choices are
    /// given up front.
    #[instrument]
    pub fn replay(mode: GameMode, positions: &[Position]) -> Result<Game, MoveError> {
        positions
            .iter()
            .try_fold(Game::new(mode), |game, pos| game.play(*pos, game.mover()))
    }
}

/// Checks the game invariants, folding violations into one error.
#[instrument(skip(game))]
fn verify_invariants(game: &Game) -> Result<(), MoveError> {
    GameInvariants::check_all(game).map_err(|violations| {
        warn!(?violations, "Invariant check failed after move");
        let joined = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(joined)
    })
}
