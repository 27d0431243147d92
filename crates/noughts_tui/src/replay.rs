//! Headless replay of a move list through the full session flow.

use anyhow::{Context, anyhow};
use noughts::{AiError, Board, GameMode, NameSlot, Opponent, Position, Session, SessionView};
use tracing::{debug, info, instrument};

/// Opponent that plays one predetermined square.
#[derive(Debug)]
struct ScriptedOpponent {
    next: Option<Position>,
}

impl Opponent for ScriptedOpponent {
    fn name(&self) -> &str {
        "script"
    }

    fn choose_move(&mut self, _board: &Board) -> Result<Position, AiError> {
        self.next.take().ok_or(AiError::NoEmptySquare)
    }
}

/// Plays `moves` (cell indices, both sides, in order) and returns the
/// final view.
///
/// In AI mode the computer's turns are taken from the list too, so a
/// replay is fully determined by its input.
///
/// # Errors
///
/// Fails on blank names or the first move the game rejects.
#[instrument(skip(player_one, player_two, ai_label))]
pub fn replay(
    mode: GameMode,
    moves: &[usize],
    player_one: &str,
    player_two: &str,
    ai_label: &str,
) -> anyhow::Result<SessionView> {
    let mut session = Session::with_ai_label(ai_label);
    session.choose_mode(mode)?;
    session.edit_name(NameSlot::One, player_one)?;
    if mode.needs_second_name() {
        session.edit_name(NameSlot::Two, player_two)?;
    }
    session.submit_names().context("Replay needs player names")?;

    for (turn, &idx) in moves.iter().enumerate() {
        let turn = turn + 1;
        match session.pending_ai_move() {
            Some(ticket) => {
                let pos = Position::from_index(idx)
                    .ok_or_else(|| anyhow!("Move {turn}: cell {idx} is out of range 0-8"))?;
                let mut script = ScriptedOpponent { next: Some(pos) };
                session
                    .play_ai_move(ticket, &mut script)
                    .with_context(|| format!("Move {turn}: computer cannot play cell {idx}"))?;
            }
            None => {
                session
                    .click_cell(idx)
                    .with_context(|| format!("Move {turn}: cannot play cell {idx}"))?;
            }
        }
        debug!(turn, idx, "Replayed move");
    }

    let view = session.view();
    info!(phase = %view.phase, moves = moves.len(), "Replay finished");
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::{Outcome, Phase, Player};

    #[test]
    fn test_ai_turns_come_from_the_list() {
        let view = replay(GameMode::PlayerVsAi, &[0, 4, 1], "Ada", "", "Robot").unwrap();
        assert_eq!(view.cells[4], Some(Player::O));
        assert_eq!(view.status.as_deref(), Some("Robot's turn"));
        assert!(view.awaiting_computer);
    }

    #[test]
    fn test_draw() {
        let view = replay(
            GameMode::PlayerVsPlayer,
            &[0, 1, 2, 4, 3, 5, 7, 6, 8],
            "Ada",
            "Bob",
            "AI",
        )
        .unwrap();
        assert_eq!(view.phase, Phase::Finished);
        assert_eq!(view.outcome, Some(Outcome::Draw));
        assert_eq!(view.status.as_deref(), Some("Draw!"));
    }

    #[test]
    fn test_rejected_move_reports_turn() {
        let err = replay(GameMode::PlayerVsPlayer, &[4, 4], "Ada", "Bob", "AI").unwrap_err();
        assert!(err.to_string().contains("Move 2"), "{err}");
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(replay(GameMode::PlayerVsPlayer, &[0], "Ada", " ", "AI").is_err());
    }
}
