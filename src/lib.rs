//! Tic-tac-toe board library
//!
//! A pure game engine for a 3x3 tic-tac-toe board plus a terminal front end
//! that renders it.
//!
//! # Architecture
//!
//! - **Engine**: [`GameState`] owns the board and turn; [`evaluate_outcome`]
//!   derives winner, winning line and draw from any [`Board`]
//! - **View**: [`BoardView`] is the read model a renderer consumes
//! - **TUI**: [`run_tui`] drives the board with keyboard and mouse
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{GameState, IllegalMove, Mark};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.outcome().winner(), Some(Mark::X));
//! assert_eq!(game.status().to_string(), "Player X Wins!");
//! assert_eq!(game.try_apply_move(8), Err(IllegalMove::GameAlreadyOver));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod tictactoe;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings, ThemeSettings};

// Crate-level exports - Game engine
pub use tictactoe::{
    Board, BoardView, CELL_COUNT, Cell, CellView, Direction, GameState, IllegalMove, LINES, Line,
    Mark, Outcome, Placement, Position, Status, evaluate_outcome, reset_game,
};

// Crate-level exports - Rules
pub use tictactoe::rules;

// Crate-level exports - Terminal UI
pub use tui::run_tui;
