//! Render-ready projection of a game.
//!
//! Everything a front end needs to draw the board and gate input, with no
//! styling decisions baked in.

use super::{CELL_COUNT, Cell, GameState};
use serde::Serialize;
use tracing::instrument;

/// One cell as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Board index (0-8).
    pub index: usize,
    /// Cell contents.
    pub cell: Cell,
    /// Cell lies on the winning line.
    pub is_winning: bool,
}

/// Snapshot of everything the presentation layer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Cells in row-major order.
    pub cells: [CellView; CELL_COUNT],
    /// Status line, e.g. `Next Player: X`.
    pub status: String,
    /// Cells accept no further input.
    pub is_game_over: bool,
    /// Caption for the reset control.
    pub reset_label: &'static str,
}

impl BoardView {
    /// Projects a game state.
    #[instrument(level = "trace")]
    pub fn from_state(state: &GameState) -> Self {
        let outcome = state.outcome();
        let board = state.board();
        let cells = std::array::from_fn(|index| CellView {
            index,
            cell: board.get(index).unwrap_or_default(),
            is_winning: outcome.is_winning_cell(index),
        });
        let is_game_over = outcome.is_game_over();
        Self {
            cells,
            status: outcome.status(state.next_mark()).to_string(),
            is_game_over,
            reset_label: if is_game_over { "Play Again" } else { "Reset Game" },
        }
    }
}

impl From<&GameState> for BoardView {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}
