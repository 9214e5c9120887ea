//! Error types for the engine.

use crate::types::{Move, Player};
use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Move),

    /// The coordinates are not on the board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game already reached a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A stored game does not agree with its own history.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// The search had nothing to play.
    #[display("{}", _0)]
    NoMove(SearchError),
}

impl std::error::Error for MoveError {}

impl From<SearchError> for MoveError {
    fn from(err: SearchError) -> Self {
        MoveError::NoMove(err)
    }
}

/// Search precondition violation with location tracking.
///
/// Raised when the computer is asked to move on a board with no empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Search error: {} at {}:{}", message, file, line)]
pub struct SearchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SearchError {
    /// Creates a new search error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A character is neither a mark nor an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),
}

impl std::error::Error for BoardParseError {}
