//! Application state and event handling.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as Point, Rect};
use tracing::{debug, instrument};

use super::input::{Command, command_for_key};
use super::ui;
use crate::tictactoe::{BoardView, GameState, Position};

/// Main application state.
///
/// Owns the single [`GameState`]; every event is handled to completion
/// before the next one is read.
#[derive(Debug, Clone, Default)]
pub struct App {
    state: GameState,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The keyboard selection.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Set once the user asks to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render-ready snapshot of the game.
    pub fn view(&self) -> BoardView {
        BoardView::from_state(&self.state)
    }

    /// Handles a key press; releases and repeats are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match command_for_key(key.code) {
            Some(command) => self.execute(command),
            None => debug!(code = ?key.code, "Unbound key"),
        }
    }

    /// Handles a mouse event against the layout for `area`.
    ///
    /// A left click on a cell places a mark there; on the reset button it
    /// starts a new game.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let point = Point::new(mouse.column, mouse.row);
        let areas = ui::layout(area);

        if areas.reset.contains(point) {
            self.execute(Command::Reset);
        } else if let Some(pos) = areas
            .cells
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
        {
            self.execute(Command::PlaceAt(pos));
        } else {
            debug!(column = mouse.column, row = mouse.row, "Click outside controls");
        }
    }

    /// Runs one command.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::MoveCursor(direction) => {
                self.cursor = self.cursor.step(direction);
            }
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Command::Reset => {
                self.state.reset();
                self.cursor = Position::default();
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, pos: Position) {
        // Cells are disabled once the game is over, drawn games included.
        if self.state.is_game_over() {
            debug!(%pos, "Board disabled");
            return;
        }
        self.state.apply_move(pos.to_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Cell, Direction, Mark};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click_center(app: &mut App, rect: Rect, area: Rect) {
        app.handle_mouse(
            left_click(rect.x + rect.width / 2, rect.y + rect.height / 2),
            area,
        );
    }

    #[test]
    fn test_keyboard_navigation_and_place() {
        let mut app = App::new();
        assert_eq!(app.cursor(), Position::Center);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().board().get(0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(app.state().next_mark(), Mark::O);
    }

    #[test]
    fn test_digit_places_and_moves_cursor() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.cursor(), Position::BottomRight);
        assert_eq!(app.state().board().get(8), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_repeat_on_same_cell_is_ignored() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char(' '));
        let before = *app.state();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::new();
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.state(), &GameState::new());
    }

    #[test]
    fn test_mouse_click_places_mark() {
        let area = Rect::new(0, 0, 60, 24);
        let areas = ui::layout(area);
        let mut app = App::new();
        click_center(&mut app, areas.cells[2], area);
        assert_eq!(app.state().board().get(2), Some(Cell::Occupied(Mark::X)));
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_right_click_and_stray_click_do_nothing() {
        let area = Rect::new(0, 0, 60, 24);
        let areas = ui::layout(area);
        let mut app = App::new();
        let cell = areas.cells[4];
        let mut event = left_click(cell.x + 1, cell.y + 1);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(event, area);
        app.handle_mouse(left_click(0, 0), area);
        assert_eq!(app.state(), &GameState::new());
    }

    #[test]
    fn test_reset_button_restarts_game() {
        let area = Rect::new(0, 0, 60, 24);
        let areas = ui::layout(area);
        let mut app = App::new();
        for index in [0, 4, 8] {
            click_center(&mut app, areas.cells[index], area);
        }
        click_center(&mut app, areas.reset, area);
        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_board_disabled_after_win() {
        let mut app = App::new();
        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.state().outcome().winner(), Some(Mark::X));
        let before = *app.state();
        press(&mut app, KeyCode::Char('9'));
        app.execute(Command::MoveCursor(Direction::Down));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), &before);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state(), &GameState::new());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
