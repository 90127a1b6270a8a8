//! Derived game outcome: winner, winning line and draw flag.

use super::rules::{Line, find_winning_line, is_full};
use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Facts derived from a board.
///
/// Never stored alongside the board; recompute it with [`evaluate_outcome`]
/// whenever the board changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    winner: Option<Mark>,
    winning_line: Option<Line>,
    is_draw: bool,
}

impl Outcome {
    /// The winning mark, if a line is complete.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The first completed line in scan order.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Board is full with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// A winner exists or the game is drawn.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Whether `index` belongs to the winning line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(index))
    }

    /// Status to show given whose turn is next.
    pub fn status(&self, next_mark: Mark) -> Status {
        match (self.winner, self.is_draw) {
            (Some(winner), _) => Status::Won(winner),
            (None, true) => Status::Drawn,
            (None, false) => Status::NextPlayer(next_mark),
        }
    }
}

/// Human-readable game status, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Player {_0} Wins!")]
    Won(Mark),
    /// Board full, no line.
    #[display("Game Drawn!")]
    Drawn,
    /// Game continues.
    #[display("Next Player: {_0}")]
    NextPlayer(Mark),
}

/// Evaluates a board.
///
/// Pure: the same board always yields the same outcome.
#[instrument(level = "debug")]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    match find_winning_line(board) {
        Some((winner, line)) => Outcome {
            winner: Some(winner),
            winning_line: Some(line),
            is_draw: false,
        },
        None => Outcome {
            winner: None,
            winning_line: None,
            is_draw: is_full(board),
        },
    }
}
