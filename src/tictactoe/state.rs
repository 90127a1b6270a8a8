//! Game state and the move controller.

use super::action::{IllegalMove, Placement};
use super::outcome::{Outcome, Status, evaluate_outcome};
use super::{Board, CELL_COUNT, Mark};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete game state: the board and whose turn is next.
///
/// Fields are private; the only ways to change a state are
/// [`GameState::try_apply_move`] (and its wrappers) and [`GameState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    board: Board,
    next_mark: Mark,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    /// Whether the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_game_over()
    }

    /// Status line for the current position.
    pub fn status(&self) -> Status {
        self.outcome().status(self.next_mark)
    }

    /// Places the next mark at `index`, reporting why a move is illegal.
    ///
    /// Checks run in order: range, occupancy, then whether a winner exists.
    /// A full board needs no separate check since every cell is occupied.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] and leaves the state untouched if the move is
    /// rejected.
    #[instrument(skip(self), fields(next_mark = %self.next_mark))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<Placement, IllegalMove> {
        if index >= CELL_COUNT {
            return Err(IllegalMove::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            return Err(IllegalMove::CellOccupied(index));
        }
        if self.outcome().winner().is_some() {
            return Err(IllegalMove::GameAlreadyOver);
        }

        let mark = self.next_mark;
        self.board.place(index, mark);
        self.next_mark = mark.opponent();

        let placement = Placement { index, mark };
        info!(%placement, "Move applied");
        Ok(placement)
    }

    /// Places the next mark at `index`, ignoring illegal moves.
    ///
    /// Returns whether the move was accepted. Rejections are logged, not
    /// surfaced.
    pub fn apply_move(&mut self, index: usize) -> bool {
        match self.try_apply_move(index) {
            Ok(_) => true,
            Err(reason) => {
                debug!(index, %reason, "Move ignored");
                false
            }
        }
    }

    /// Returns the state after a move at `index`; unchanged if illegal.
    #[must_use]
    pub fn applied(mut self, index: usize) -> Self {
        self.apply_move(index);
        self
    }

    /// Replaces the whole state with a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = reset_game();
        info!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh game: empty board, X to move.
pub fn reset_game() -> GameState {
    GameState::new()
}
