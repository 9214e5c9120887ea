//! Explicit game state for drivers.
//!
//! A `Game` carries everything a driver needs between moves (the board,
//! the side to move and the history), so no state is captured implicitly.

use crate::board::Board;
use crate::engine;
use crate::error::MoveError;
use crate::rules;
use crate::types::{Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single game from the empty board, X moving first.
///
/// `InProgress` moves to `Win(X)`, `Win(O)` or `Draw`; the terminal states
/// are absorbing and every further move is rejected.
///
/// Deserializing replays the recorded history and rejects the record unless
/// the board and side to move match that replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

/// Unchecked serialized form of a [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl TryFrom<GameRecord> for Game {
    type Error = MoveError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let moves = record
            .history
            .iter()
            .map(|mv| Move::try_new(mv.row, mv.col))
            .collect::<Result<Vec<_>, _>>()?;

        let game = Game::replay(&moves)?;
        if game.board != record.board || game.to_move != record.to_move {
            return Err(MoveError::InvariantViolation(
                "board or side to move does not match the move history".to_string(),
            ));
        }
        Ok(game)
    }
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays moves from the empty board, alternating sides.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.play(*mv)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// After the game ends this is the player who moved last.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Derives the current outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Plays a move for the side to move.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, `SquareOccupied` if the cell is
    /// taken. The game is unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }

        if !engine::apply_move(&mut self.board, mv.row, mv.col, self.to_move) {
            return Err(MoveError::SquareOccupied(mv));
        }
        self.history.push(mv);

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }

        debug_assert!(self.marks_balanced(), "X and O marks out of balance");
        Ok(outcome)
    }

    /// Plays a move on behalf of `player`, rejecting it when out of turn.
    ///
    /// # Errors
    ///
    /// `WrongPlayer` when it is not `player`'s turn, otherwise as [`Game::play`].
    pub fn play_as(&mut self, player: Player, mv: Move) -> Result<Outcome, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            return Err(MoveError::WrongPlayer(player));
        }
        self.play(mv)
    }

    /// Lets the search choose and play the move for the side to move.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_computer(&mut self) -> Result<(Move, Outcome), MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut scratch = self.board;
        let mv = engine::computer_move_as(&mut scratch, self.to_move)?;
        debug!(%mv, "Computer chose move");

        let outcome = self.play(mv)?;
        Ok((mv, outcome))
    }

    /// X has either as many marks as O or one more.
    fn marks_balanced(&self) -> bool {
        let x = self.board.mark_count(Player::X);
        let o = self.board.mark_count(Player::O);
        x == o || x == o + 1
    }
}
