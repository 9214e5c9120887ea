//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the board, the search and the driver all share one definition
//! of a win and a draw.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_line};

use crate::board::Board;
use crate::types::{Outcome, Player};

/// Derives the outcome of a position.
///
/// O's lines are checked before X's, then fullness.
pub fn outcome(board: &Board) -> Outcome {
    if has_line(board, Player::O) {
        Outcome::Win(Player::O)
    } else if has_line(board, Player::X) {
        Outcome::Win(Player::X)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
