//! Terminal UI for the board.

mod app;
mod input;
mod theme;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

use crate::config::Settings;
use app::App;
use theme::Theme;

/// Runs the interactive board until the user quits.
///
/// The terminal is restored before any error from the event loop is returned.
pub fn run_tui(settings: &Settings) -> Result<()> {
    let theme = Theme::from_settings(settings.theme())?;

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    // Restores the terminal on every exit from here on, setup failures included.
    let _guard = TerminalGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, App::new(), &theme);
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Runs a restore action when dropped. Restore failures are logged.
struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Draw, then block on exactly one event, until quit.
#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    theme: &Theme,
) -> Result<()> {
    loop {
        let area = terminal.draw(|frame| ui::draw(frame, &app, theme))?.area;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
