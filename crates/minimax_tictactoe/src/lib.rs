//! Tic-tac-toe rules engine with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move legality, placement and undo
//! - **Rules**: pure win/draw detection over a board
//! - **Search**: depth-first minimax that always plays to terminal depth
//! - **Engine**: the narrow interface a driver calls into
//! - **Game**: explicit driver state (board, side to move, history)
//!
//! O is the maximizing side: an O win scores `+1`, an X win `-1`, a draw `0`.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Outcome, Player, apply_move, computer_move, new_board, outcome};
//!
//! let mut board = new_board();
//! assert!(apply_move(&mut board, 0, 0, Player::X));
//! assert!(apply_move(&mut board, 0, 2, Player::O));
//! assert!(apply_move(&mut board, 1, 1, Player::X));
//!
//! // X threatens the diagonal; the computer must block.
//! let reply = computer_move(&mut board).expect("board has empty cells");
//! assert_eq!((reply.row, reply.col), (2, 2));
//! assert!(apply_move(&mut board, reply.row, reply.col, Player::O));
//! assert_eq!(outcome(&board), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod game;
pub mod rules;
pub mod search;
mod types;

pub use board::Board;
pub use engine::{apply_move, computer_move, computer_move_as, new_board, outcome};
pub use error::{BoardParseError, MoveError, SearchError};
pub use game::Game;
pub use search::{
    ScoredMove, Score, Searcher, best_move, best_move_for, evaluate, pick_best, score_moves,
};
pub use types::{Cell, Move, Outcome, Player};
