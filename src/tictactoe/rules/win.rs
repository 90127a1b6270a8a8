//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use serde::Serialize;
use tracing::instrument;

/// One of the eight winning triples of cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line([usize; 3]);

impl Line {
    /// Cell indices covered by this line, in ascending order.
    pub fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Whether `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Winning lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    // Columns
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    // Diagonals
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// Finds the first completed line on the board.
///
/// Returns the owning mark and the line. When several lines are complete
/// (unreachable under legal play) only the first in [`LINES`] order is reported.
#[instrument(level = "trace")]
pub fn find_winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.indices();
        match board.get(a) {
            Some(Cell::Occupied(mark))
                if board.get(b) == Some(Cell::Occupied(mark))
                    && board.get(c) == Some(Cell::Occupied(mark)) =>
            {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
