//! User settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_board.toml";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File the TUI writes logs to.
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Board colours.
    theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe_board.log"),
            log_filter: "info".to_string(),
            theme: ThemeSettings::default(),
        }
    }
}

/// Colour names for the board, parsed by ratatui (`"red"`, `"#00ff00"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Colour of X marks.
    x_color: String,
    /// Colour of O marks.
    o_color: String,
    /// Background of cells on the winning line.
    highlight_color: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            x_color: "red".to_string(),
            o_color: "blue".to_string(),
            highlight_color: "green".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`DEFAULT_CONFIG_PATH`] is used if present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_default(path, Path::new(DEFAULT_CONFIG_PATH))
    }

    #[instrument]
    fn load_with_default(path: Option<&Path>, default_path: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if default_path.exists() => Self::from_file(default_path),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!("Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text; missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
