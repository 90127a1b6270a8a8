//! Tic-tac-toe game engine.

mod action;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{IllegalMove, Placement};
pub use outcome::{Outcome, Status, evaluate_outcome};
pub use position::{Direction, Position};
pub use rules::{LINES, Line};
pub use state::{GameState, reset_game};
pub use types::{Board, CELL_COUNT, Cell, Mark};
pub use view::{BoardView, CellView};
