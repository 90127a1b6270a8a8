//! Move results for tic-tac-toe.
//!
//! A move is just a cell index. Accepted moves come back as a [`Placement`];
//! rejected ones as an [`IllegalMove`] the caller is free to discard.

use super::Mark;
use serde::{Deserialize, Serialize};

/// A mark that was placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The cell that received the mark.
    pub index: usize,
    /// The mark placed.
    pub mark: Mark,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.mark, self.index)
    }
}

/// Why a move was rejected. Rejection never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// Index is not in `0..9`.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// A player has already won.
    #[display("Game is already over")]
    GameAlreadyOver,
}
