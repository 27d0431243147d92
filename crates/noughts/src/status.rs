//! Status line derivation.

use crate::{GameMode, Outcome, Player, PlayerNames};

/// Builds the status line for a game.
///
/// `"<winner> wins!"`, `"Draw!"`, or `"<player to move>'s turn"`.
pub fn status_text(
    outcome: &Outcome,
    to_move: Player,
    names: &PlayerNames,
    mode: GameMode,
    ai_label: &str,
) -> String {
    match outcome {
        Outcome::Win { player, .. } => {
            format!("{} wins!", names.display_name(*player, mode, ai_label))
        }
        Outcome::Draw => "Draw!".to_string(),
        Outcome::InProgress => {
            format!("{}'s turn", names.display_name(to_move, mode, ai_label))
        }
    }
}
