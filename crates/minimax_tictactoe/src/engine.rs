//! The narrow interface a driver calls into.

use crate::board::Board;
use crate::error::SearchError;
use crate::rules;
use crate::search;
use crate::types::{Move, Outcome, Player};
use tracing::{error, instrument};

/// Creates an empty 3x3 board.
pub fn new_board() -> Board {
    Board::new()
}

/// Places the player's mark at (row, col).
///
/// Returns false if the cell is occupied; the driver re-prompts on that.
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, row: usize, col: usize, player: Player) -> bool {
    board.place(row, col, player)
}

/// Derives the outcome of the current position.
pub fn outcome(board: &Board) -> Outcome {
    rules::outcome(board)
}

/// Computes the computer's (O's) reply.
///
/// # Errors
///
/// Returns `SearchError` when the board is full. Drivers are expected to
/// stop asking once [`outcome`] reports a terminal state.
pub fn computer_move(board: &mut Board) -> Result<Move, SearchError> {
    computer_move_as(board, Player::O)
}

/// Computes the optimal move for a computer playing `player`.
///
/// # Errors
///
/// Returns `SearchError` when the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn computer_move_as(board: &mut Board, player: Player) -> Result<Move, SearchError> {
    match search::best_move_for(board, player) {
        Some(mv) => Ok(mv),
        None => {
            error!("Computer asked to move on a full board");
            Err(SearchError::new("no legal move: the board is full"))
        }
    }
}
