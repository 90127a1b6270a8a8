//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::App;
use super::theme::Theme;
use crate::tictactoe::{CELL_COUNT, Cell, CellView, Position, Status};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3;
const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 1 + 3 + GRID_HEIGHT + 3 + 2;
const BUTTON_WIDTH: u16 = 16;

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Title line.
    pub title: Rect,
    /// Status box.
    pub status: Rect,
    /// One rect per cell, row-major.
    pub cells: [Rect; CELL_COUNT],
    /// Reset button.
    pub reset: Rect,
    /// Key hints.
    pub help: Rect,
}

/// Computes where everything goes inside `area`.
pub fn layout(area: Rect) -> BoardLayout {
    let panel = center_rect(area, PANEL_WIDTH, PANEL_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title
            Constraint::Length(3),           // Status
            Constraint::Length(GRID_HEIGHT), // Board
            Constraint::Length(3),           // Reset
            Constraint::Length(2),           // Help
        ])
        .split(panel);

    let grid = center_rect(rows[2], GRID_WIDTH, GRID_HEIGHT);
    let cells = std::array::from_fn(|index| {
        let row = (index / 3) as u16;
        let col = (index % 3) as u16;
        Rect::new(
            grid.x + col * CELL_WIDTH,
            grid.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid)
    });

    BoardLayout {
        title: rows[0],
        status: rows[1],
        cells,
        reset: center_rect(rows[3], BUTTON_WIDTH, 3),
        help: rows[4],
    }
}

/// Renders the whole board screen.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let areas = layout(frame.area());
    let view = app.view();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, areas.title);

    let status_style = match app.state().status() {
        Status::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Drawn => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Gray),
    };
    let status = Paragraph::new(view.status.as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, areas.status);

    for pos in Position::iter() {
        let index = pos.to_index();
        let selected = pos == app.cursor() && !view.is_game_over;
        draw_cell(frame, areas.cells[index], &view.cells[index], selected, theme);
    }

    let button_color = if view.is_game_over {
        Color::Magenta
    } else {
        Color::Blue
    };
    let reset = Paragraph::new(view.reset_label)
        .style(Style::default().fg(button_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(button_color)),
        );
    frame.render_widget(reset, areas.reset);

    let help = Paragraph::new(vec![
        Line::from("arrows/hjkl move · enter/space/1-9 place"),
        Line::from(format!("{} · r reset · q quit", app.cursor())),
    ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, areas.help);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, selected: bool, theme: &Theme) {
    let mut style = match cell.cell {
        Cell::Empty => Style::default(),
        Cell::Occupied(mark) => Style::default()
            .fg(theme.mark(mark))
            .add_modifier(Modifier::BOLD),
    };
    if cell.is_winning {
        style = style.bg(theme.highlight());
    }

    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(cell.cell.glyph())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Command;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).expect("test terminal");
        terminal
            .draw(|frame| draw(frame, app, &Theme::default()))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn cell_center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_layout_cells_do_not_overlap() {
        let areas = layout(Rect::new(0, 0, 50, 20));
        for (i, a) in areas.cells.iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            for b in &areas.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
            assert!(!a.intersects(areas.reset));
        }
        assert!(areas.cells[0].x < areas.cells[1].x);
        assert!(areas.cells[0].y < areas.cells[3].y);
    }

    #[test]
    fn test_fresh_board_shows_next_player() {
        let buffer = render(&App::new());
        let text = text(&buffer);
        assert!(text.contains("Next Player: X"));
        assert!(text.contains("Reset Game"));
        assert!(!text.contains("Play Again"));
    }

    #[test]
    fn test_marks_drawn_in_their_cells() {
        let mut app = App::new();
        app.execute(Command::PlaceAt(Position::Center));
        app.execute(Command::PlaceAt(Position::TopLeft));
        let buffer = render(&app);
        let areas = layout(buffer.area);

        let center = &buffer[cell_center(areas.cells[4])];
        assert_eq!(center.symbol(), "X");
        assert_eq!(center.fg, Color::Red);
        let top_left = &buffer[cell_center(areas.cells[0])];
        assert_eq!(top_left.symbol(), "O");
        assert_eq!(top_left.fg, Color::Blue);
    }

    #[test]
    fn test_win_highlights_line_and_relabels_reset() {
        let mut app = App::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            app.execute(Command::PlaceAt(pos));
        }
        let buffer = render(&app);
        let text = text(&buffer);
        assert!(text.contains("Player X Wins!"));
        assert!(text.contains("Play Again"));

        let areas = layout(buffer.area);
        for index in 0..3 {
            assert_eq!(buffer[cell_center(areas.cells[index])].bg, Color::Green);
        }
        assert_ne!(buffer[cell_center(areas.cells[3])].bg, Color::Green);
    }

    #[test]
    fn test_help_lists_every_binding() {
        let buffer = render(&App::new());
        let text = text(&buffer);
        assert!(text.contains("arrows/hjkl move"));
        assert!(text.contains("enter/space/1-9 place"));
        assert!(text.contains("r reset · q quit"));

        let help = layout(buffer.area).help;
        assert_eq!(help.height, 2);
        assert!(help.width >= 40);
    }

    #[test]
    fn test_draw_status() {
        let mut app = App::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.execute(Command::PlaceAt(Position::from_index(index).expect("on board")));
        }
        let text = text(&render(&app));
        assert!(text.contains("Game Drawn!"));
        assert!(text.contains("Play Again"));
    }
}
