//! Keyboard mapping.

use crossterm::event::KeyCode;
use timetravel_tictactoe::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 1.
    Up,
    /// Towards row 3.
    Down,
    /// Towards column 1.
    Left,
    /// Towards column 3.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor or the history selection.
    Navigate(Direction),
    /// Play the cursor square or jump to the selected step.
    Select,
    /// Play a square directly (keys `1`-`9`).
    Play(Position),
    /// Switch focus between board and history list.
    SwitchFocus,
    /// Flip history order.
    ToggleOrder,
    /// Start a fresh game.
    Restart,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('o') => Some(Action::ToggleOrder),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_index(c as usize - '1' as usize).map(Action::Play)
        }
        _ => None,
    }
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Left), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_number_keys_play_squares() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Play(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Play(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(action_for(KeyCode::Char('o')), Some(Action::ToggleOrder));
        assert_eq!(action_for(KeyCode::Tab), Some(Action::SwitchFocus));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::Select));
    }
}
