//! Player display names collected on the name-entry screen.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{GameMode, Player};

/// Label shown for the computer opponent unless configured otherwise.
pub const DEFAULT_AI_LABEL: &str = "AI";

/// Which name field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameSlot {
    /// Player 1, who plays X.
    One,
    /// Player 2, who plays O (PvP only).
    Two,
}

impl NameSlot {
    /// Placeholder text for the input field.
    pub fn placeholder(self) -> &'static str {
        match self {
            NameSlot::One => "Player 1 (X)",
            NameSlot::Two => "Player 2 (O)",
        }
    }

    /// Returns the other slot.
    pub fn other(self) -> Self {
        match self {
            NameSlot::One => NameSlot::Two,
            NameSlot::Two => NameSlot::One,
        }
    }
}

/// Raw name text as typed; trimming applies on validation and display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    player_one: String,
    player_two: String,
}

impl PlayerNames {
    /// Creates names from the two raw strings.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Returns the raw text in a slot.
    pub fn get(&self, slot: NameSlot) -> &str {
        match slot {
            NameSlot::One => &self.player_one,
            NameSlot::Two => &self.player_two,
        }
    }

    /// Replaces the raw text in a slot.
    pub fn set(&mut self, slot: NameSlot, text: impl Into<String>) {
        match slot {
            NameSlot::One => self.player_one = text.into(),
            NameSlot::Two => self.player_two = text.into(),
        }
    }

    /// Whether the names are enough to start a game in `mode`.
    ///
    /// Player 1 is always required; player 2 only for PvP.
    #[instrument(skip(self))]
    pub fn complete_for(&self, mode: GameMode) -> bool {
        let one = !self.player_one.trim().is_empty();
        let two = !self.player_two.trim().is_empty();
        one && (two || !mode.needs_second_name())
    }

    /// Name shown for `player`.
    ///
    /// Falls back to the raw symbol when blank, and to `ai_label` for the
    /// computer's mark in AI mode.
    pub fn display_name(&self, player: Player, mode: GameMode, ai_label: &str) -> String {
        let raw = match (player, mode) {
            (Player::X, _) => self.player_one.trim(),
            (Player::O, GameMode::PlayerVsAi) => return ai_label.to_string(),
            (Player::O, GameMode::PlayerVsPlayer) => self.player_two.trim(),
        };
        if raw.is_empty() {
            player.symbol().to_string()
        } else {
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvp_needs_both_names() {
        let names = PlayerNames::new("Ada", "   ");
        assert!(!names.complete_for(GameMode::PlayerVsPlayer));
        assert!(names.complete_for(GameMode::PlayerVsAi));
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let names = PlayerNames::new(" \t", "Bob");
        assert!(!names.complete_for(GameMode::PlayerVsAi));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let names = PlayerNames::new("  Ada ", "");
        assert_eq!(names.display_name(Player::X, GameMode::PlayerVsPlayer, "AI"), "Ada");
        assert_eq!(names.display_name(Player::O, GameMode::PlayerVsPlayer, "AI"), "O");
        assert_eq!(names.display_name(Player::O, GameMode::PlayerVsAi, "Robot"), "Robot");
    }
}
