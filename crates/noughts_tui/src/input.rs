//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts::Position;

/// Moves the board cursor one cell for an arrow key, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps keypad digits 1-9 to cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_arrows_move_one_cell() {
        assert_eq!(move_cursor(Center, KeyCode::Up), TopCenter);
        assert_eq!(move_cursor(Center, KeyCode::Down), BottomCenter);
        assert_eq!(move_cursor(Center, KeyCode::Left), MiddleLeft);
        assert_eq!(move_cursor(Center, KeyCode::Right), MiddleRight);
    }

    #[test]
    fn test_edges_stop_cursor() {
        assert_eq!(move_cursor(TopLeft, KeyCode::Up), TopLeft);
        assert_eq!(move_cursor(TopLeft, KeyCode::Left), TopLeft);
        assert_eq!(move_cursor(BottomRight, KeyCode::Down), BottomRight);
        assert_eq!(move_cursor(BottomRight, KeyCode::Right), BottomRight);
        assert_eq!(move_cursor(TopRight, KeyCode::Char('x')), TopRight);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(0));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(8));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Enter), None);
    }
}
