//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the same checks back move validation, invariants and
//! the status line.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use tracing::instrument;

use crate::outcome::Outcome;
use crate::types::Board;

/// Evaluates a board into its outcome.
///
/// Lines are checked in [`LINES`] order and the first complete one wins.
/// Otherwise a full board is a draw and anything else is in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Win { player, line };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn board(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (idx, c) in cells.chars().enumerate() {
            squares[idx] = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_main_diagonal_win() {
        let outcome = evaluate(&board("XOO.X...X"));
        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::X,
                line: [Position::TopLeft, Position::Center, Position::BottomRight],
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(evaluate(&board("XXXOOXXOO")).winner(), Some(Player::X));
    }

    #[test]
    fn test_first_line_in_order_reported() {
        // Top row and left column both complete; rows come first.
        let outcome = evaluate(&board("XXXXOOXOO"));
        assert_eq!(
            outcome.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }
}
