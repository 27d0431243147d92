//! Game modes.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::Player;
use crate::action::MoveSource;

/// How the two marks are controlled.
///
/// Fixed when chosen from the menu and only cleared by going back to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum GameMode {
    /// Two people share the keyboard.
    #[strum(to_string = "Player vs Player")]
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    /// One person (X) against the random computer opponent (O).
    #[strum(to_string = "Player vs AI")]
    #[serde(rename = "ai")]
    PlayerVsAi,
}

impl GameMode {
    /// Returns who controls the given player in this mode.
    #[instrument]
    pub fn controller_of(self, player: Player) -> MoveSource {
        match (self, player) {
            (GameMode::PlayerVsAi, Player::O) => MoveSource::Computer,
            _ => MoveSource::Human,
        }
    }

    /// Whether player 2's name is collected in this mode.
    pub fn needs_second_name(self) -> bool {
        matches!(self, GameMode::PlayerVsPlayer)
    }

    /// Parses the short names used on the command line.
    pub fn from_short(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Some(GameMode::PlayerVsPlayer),
            "ai" | "pvai" => Some(GameMode::PlayerVsAi),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_only_plays_o_in_ai_mode() {
        assert_eq!(GameMode::PlayerVsAi.controller_of(Player::O), MoveSource::Computer);
        assert_eq!(GameMode::PlayerVsAi.controller_of(Player::X), MoveSource::Human);
        assert_eq!(GameMode::PlayerVsPlayer.controller_of(Player::O), MoveSource::Human);
    }

    #[test]
    fn test_from_short() {
        assert_eq!(GameMode::from_short(" PvP "), Some(GameMode::PlayerVsPlayer));
        assert_eq!(GameMode::from_short("ai"), Some(GameMode::PlayerVsAi));
        assert_eq!(GameMode::from_short("solo"), None);
    }
}
