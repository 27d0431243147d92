//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::Game;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().mark_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Player, Position, Square};

    #[test]
    fn test_replayed_game_holds() {
        let game = Game::replay(
            GameMode::PlayerVsPlayer,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        )
        .expect("valid replay");
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut game = Game::new(GameMode::PlayerVsPlayer);
        game.board.set(Position::TopRight, Square::Occupied(Player::X));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
