//! Key mapping for keyboard navigation.

use crossterm::event::KeyCode;
use hotseat_tictactoe::Position;

/// Moves cursor based on arrow keys. Edges clamp.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up => cursor.up(),
        KeyCode::Down => cursor.down(),
        KeyCode::Left => cursor.left(),
        KeyCode::Right => cursor.right(),
        _ => cursor,
    }
}

/// Maps `1`-`9` to cell index 0-8.
pub fn digit_cell(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_digit_cell() {
        assert_eq!(digit_cell('1'), Some(0));
        assert_eq!(digit_cell('9'), Some(8));
        assert_eq!(digit_cell('0'), None);
        assert_eq!(digit_cell('a'), None);
    }
}
