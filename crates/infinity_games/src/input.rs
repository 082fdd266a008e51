//! Keyboard handling: cursor movement and key bindings.

use crossterm::event::KeyCode;
use infinity_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Position),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Place at a position picked by number key.
    PlaceAt(Position),
    /// Start the next round after a win.
    NextRound,
    /// Restart the current round without advancing the counter.
    Restart,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    None,
}

/// Moves cursor based on arrow keys. Stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a key to an action given the current cursor.
///
/// Number keys follow the on-screen labels: `1` is the top-left square.
pub fn action_for(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::MoveCursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::None, Action::PlaceAt),
        KeyCode::Char('n') => Action::NextRound,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}
