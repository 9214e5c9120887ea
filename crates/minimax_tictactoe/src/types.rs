//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, minimizing side).
    #[default]
    X,
    /// Player O (goes second, maximizing side).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player leaves on a cell.
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::MarkX,
            Player::O => Cell::MarkO,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by X.
    MarkX,
    /// Marked by O.
    MarkO,
}

impl Cell {
    /// Single-character rendering used by `Board`'s `Display`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::MarkX => 'X',
            Cell::MarkO => 'O',
        }
    }
}

/// A move: the (row, column) of the target cell.
///
/// A move is only legal while its cell is empty; that is checked by the
/// board at placement time, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0-2 from the top.
    pub row: usize,
    /// Column, 0-2 from the left.
    pub col: usize,
}

impl Move {
    /// Creates a move, panicking if the coordinates fall off the board.
    ///
    /// Use [`Move::try_new`] for untrusted input.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < SIZE && col < SIZE,
            "move ({row}, {col}) is off the 3x3 board"
        );
        Self { row, col }
    }

    /// Creates a move from untrusted coordinates.
    #[instrument]
    pub fn try_new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < SIZE && col < SIZE {
            Ok(Self { row, col })
        } else {
            Err(MoveError::OutOfBounds { row, col })
        }
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then(|| Self {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    /// Returns the row-major index (0-8) of this move.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and empty cells remain.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board is full with no line.
    Draw,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`, which are absorbing.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins!", player),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_parse_is_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn test_move_index_conversion() {
        assert_eq!(Move::from_index(0), Some(Move::new(0, 0)));
        assert_eq!(Move::from_index(5), Some(Move::new(1, 2)));
        assert_eq!(Move::from_index(9), None);
        assert_eq!(Move::new(2, 1).index(), 7);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(
            Move::try_new(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert!(Move::try_new(2, 2).is_ok());
    }

    #[test]
    #[should_panic(expected = "off the 3x3 board")]
    fn test_new_panics_out_of_range() {
        let _ = Move::new(0, 3);
    }
}
