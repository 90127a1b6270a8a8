//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::find_winning_line;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// A full board with no completed line.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_winning_line(board).is_none()
}
