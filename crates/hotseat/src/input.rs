//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use hotseat_tictactoe::Position;

/// Moves cursor based on arrow keys. The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::new(row, col).unwrap_or(cursor)
}

/// Maps digits 1-9 onto the board in reading order.
pub fn digit_to_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)?;
    let index = usize::try_from(digit.checked_sub(1)?).ok()?;
    Position::from_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("in bounds")
    }

    #[test]
    fn test_arrows_move_within_grid() {
        assert_eq!(move_cursor(pos(1, 1), KeyCode::Up), pos(0, 1));
        assert_eq!(move_cursor(pos(1, 1), KeyCode::Down), pos(2, 1));
        assert_eq!(move_cursor(pos(1, 1), KeyCode::Left), pos(1, 0));
        assert_eq!(move_cursor(pos(1, 1), KeyCode::Right), pos(1, 2));
    }

    #[test]
    fn test_edges_clamp() {
        assert_eq!(move_cursor(pos(0, 0), KeyCode::Up), pos(0, 0));
        assert_eq!(move_cursor(pos(0, 0), KeyCode::Left), pos(0, 0));
        assert_eq!(move_cursor(pos(2, 2), KeyCode::Down), pos(2, 2));
        assert_eq!(move_cursor(pos(2, 2), KeyCode::Right), pos(2, 2));
    }

    #[test]
    fn test_other_keys_do_nothing() {
        assert_eq!(move_cursor(pos(1, 2), KeyCode::Enter), pos(1, 2));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_to_position('1'), Some(pos(0, 0)));
        assert_eq!(digit_to_position('5'), Some(pos(1, 1)));
        assert_eq!(digit_to_position('9'), Some(pos(2, 2)));
        assert_eq!(digit_to_position('0'), None);
        assert_eq!(digit_to_position('a'), None);
    }
}
