//! Exhaustive minimax search.
//!
//! O maximizes and X minimizes. Every line of play is explored to a terminal
//! position: there is no depth limit, pruning or caching. The board is
//! mutated in place while searching and each hypothetical placement is
//! cleared before the next one is tried, so every call leaves the board
//! exactly as it found it.

use crate::board::Board;
use crate::types::{Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a position: always one of `-1`, `0`, `+1`.
pub type Score = i8;

/// Value of a position O has won.
pub const O_WINS: Score = 1;
/// Value of a position X has won.
pub const X_WINS: Score = -1;
/// Value of a drawn position.
pub const DRAW: Score = 0;

/// A legal move together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The move.
    pub mv: Move,
    /// Value of the position after the move, assuming optimal play.
    pub score: Score,
}

/// Minimax searcher that counts the positions it visits.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions evaluated so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Computes the value of `board` with O to move if `maximizing`, X otherwise.
    ///
    /// Terminal checks run in a fixed order: O's line, X's line, then a full
    /// board.
    pub fn evaluate(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.nodes += 1;

        if board.winner(Player::O) {
            return O_WINS;
        }
        if board.winner(Player::X) {
            return X_WINS;
        }
        if board.is_full() {
            return DRAW;
        }

        let side = if maximizing { Player::O } else { Player::X };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for mv in board.legal_moves() {
            board.place(mv.row, mv.col, side);
            let score = self.evaluate(board, !maximizing);
            board.clear(mv.row, mv.col);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Scores every legal move for `player` in row-major order.
    pub fn score_moves(&mut self, board: &mut Board, player: Player) -> Vec<ScoredMove> {
        let opponent_maximizes = player.opponent() == Player::O;

        board
            .legal_moves()
            .into_iter()
            .map(|mv| {
                board.place(mv.row, mv.col, player);
                let score = self.evaluate(board, opponent_maximizes);
                board.clear(mv.row, mv.col);
                ScoredMove { mv, score }
            })
            .collect()
    }

    /// Picks the optimal move for `player`.
    ///
    /// Only a strictly better score replaces the current choice, so ties go
    /// to the first move in row-major order. Returns `None` on a full board.
    pub fn best_move_for(&mut self, board: &mut Board, player: Player) -> Option<Move> {
        pick_best(&self.score_moves(board, player), player)
    }
}

/// Picks `player`'s move from already scored moves.
///
/// Only a strictly better score replaces the current choice, so ties go to
/// the earliest entry. Returns `None` for an empty slice.
pub fn pick_best(scored: &[ScoredMove], player: Player) -> Option<Move> {
    let mut best: Option<ScoredMove> = None;

    for candidate in scored {
        let improves = match best {
            None => true,
            Some(current) => match player {
                Player::O => candidate.score > current.score,
                Player::X => candidate.score < current.score,
            },
        };
        if improves {
            best = Some(*candidate);
        }
    }

    best.map(|scored| scored.mv)
}

/// Computes the minimax value of `board`.
///
/// See [`Searcher::evaluate`].
pub fn evaluate(board: &mut Board, maximizing: bool) -> Score {
    Searcher::new().evaluate(board, maximizing)
}

/// Scores every legal move for `player` in row-major order.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &mut Board, player: Player) -> Vec<ScoredMove> {
    let mut searcher = Searcher::new();
    let scored = searcher.score_moves(board, player);
    debug!(nodes = searcher.nodes(), moves = scored.len(), "Scored moves");
    scored
}

/// Picks O's optimal move, ties going to the first in row-major order.
///
/// Precondition: the board has at least one empty cell; a full board yields
/// `None`.
pub fn best_move(board: &mut Board) -> Option<Move> {
    best_move_for(board, Player::O)
}

/// Picks the optimal move for either side.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_for(board: &mut Board, player: Player) -> Option<Move> {
    let mut searcher = Searcher::new();
    let best = searcher.best_move_for(board, player);
    debug!(nodes = searcher.nodes(), ?best, "Search finished");
    best
}
