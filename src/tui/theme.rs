//! Resolved colours for the board.

use crate::config::{ConfigError, ThemeSettings};
use crate::tictactoe::Mark;
use ratatui::style::Color;
use std::str::FromStr;

/// Board colours, parsed from [`ThemeSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    x: Color,
    o: Color,
    highlight: Color,
}

impl Theme {
    /// Parses every colour name in the settings.
    pub fn from_settings(settings: &ThemeSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            x: parse_color("x_color", settings.x_color())?,
            o: parse_color("o_color", settings.o_color())?,
            highlight: parse_color("highlight_color", settings.highlight_color())?,
        })
    }

    /// Foreground for a mark.
    pub fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Background for winning cells.
    pub fn highlight(&self) -> Color {
        self.highlight
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Red,
            o: Color::Blue,
            highlight: Color::Green,
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid colour for {}: {:?}", key, value)))
}
