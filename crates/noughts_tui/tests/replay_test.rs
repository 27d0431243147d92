//! Tests for headless replay and its JSON output.

use noughts::{GameMode, Outcome, Phase, Player, Position};
use noughts_tui::replay;

#[test]
fn test_diagonal_win_json() {
    let view = replay(GameMode::PlayerVsPlayer, &[0, 1, 4, 2, 8], "Ada", "Bob", "AI").unwrap();
    assert_eq!(view.phase, Phase::Finished);
    assert_eq!(
        view.outcome,
        Some(Outcome::Win {
            player: Player::X,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        })
    );
    assert_eq!(view.highlighted, vec![0, 4, 8]);

    let json: serde_json::Value = serde_json::to_value(&view).unwrap();
    assert_eq!(json["mode"], "pvp");
    assert_eq!(json["status"], "Ada wins!");
    assert_eq!(json["highlighted"], serde_json::json!([0, 4, 8]));
}

#[test]
fn test_ai_mode_ignores_second_name() {
    let view = replay(GameMode::PlayerVsAi, &[0, 3, 1, 4, 2], "Ada", "Bob", "AI").unwrap();
    assert_eq!(view.status.as_deref(), Some("Ada wins!"));
    assert_eq!(view.names.get(noughts::NameSlot::Two), "");
}

#[test]
fn test_out_of_range_cell_rejected() {
    assert!(replay(GameMode::PlayerVsPlayer, &[9], "Ada", "Bob", "AI").is_err());
    assert!(replay(GameMode::PlayerVsAi, &[0, 12], "Ada", "", "AI").is_err());
}

#[test]
fn test_moves_after_win_rejected() {
    let err = replay(GameMode::PlayerVsPlayer, &[0, 3, 1, 4, 2, 5], "Ada", "Bob", "AI").unwrap_err();
    assert!(err.to_string().contains("Move 6"), "{err}");
}
