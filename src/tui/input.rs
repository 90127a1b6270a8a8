//! Keyboard bindings.

use crate::tictactoe::{Direction, Position};
use crossterm::event::KeyCode;

/// What a key press asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the selection cursor.
    MoveCursor(Direction),
    /// Place the next mark under the cursor.
    PlaceAtCursor,
    /// Place the next mark at a specific cell.
    PlaceAt(Position),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a key to a command; unbound keys map to `None`.
///
/// Digits `1`-`9` address cells in reading order, so `1` is index 0.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::PlaceAt),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
