//! Derived game outcome.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::Player;

/// Ordered triple of positions that wins when uniformly occupied.
pub type Line = [Position; 3];

/// Outcome of a board, recomputed from the board on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty square remains.
    InProgress,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true while moves may still be made.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether the given position belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&pos))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, line } => write!(
                f,
                "Player {} wins on {}-{}-{}",
                player,
                line[0].to_index(),
                line[1].to_index(),
                line[2].to_index()
            ),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_only_winning_line() {
        let win = Outcome::Win {
            player: Player::O,
            line: [Position::TopRight, Position::Center, Position::BottomLeft],
        };
        assert!(win.highlights(Position::Center));
        assert!(!win.highlights(Position::TopLeft));
        assert!(!Outcome::Draw.highlights(Position::Center));
        assert!(!Outcome::InProgress.highlights(Position::Center));
    }
}
