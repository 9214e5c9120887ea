//! Terminal driver: renders the board, reads human moves, asks the engine
//! for the computer's replies.
//!
//! All state lives in the [`Game`] value threaded through the loop; input and
//! output are generic so games can be scripted in tests.

use derive_more::Display;
use minimax_tictactoe::{Board, Cell, Game, Move, MoveError, Outcome, Player, score_moves};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// A line of human input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Move(Move),
    /// Leave the game.
    Quit,
}

/// Human input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Neither a cell number, a coordinate pair nor a command.
    #[display("Enter a cell number 1-9 or a 'row col' pair (0-2)")]
    Unrecognized,

    /// Well formed but not on the board.
    #[display("{}", _0)]
    OffBoard(MoveError),
}

impl std::error::Error for InputError {}

/// Parses `1`-`9` (row-major), `row col` / `row,col` (0-based) or `q`/`quit`.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Input::Quit);
    }

    let numbers: Vec<usize> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| InputError::Unrecognized)?;

    match numbers.as_slice() {
        [cell @ 1..=9] => Move::from_index(cell - 1)
            .map(Input::Move)
            .ok_or(InputError::Unrecognized),
        [row, col] => Move::try_new(*row, *col)
            .map(Input::Move)
            .map_err(InputError::OffBoard),
        _ => Err(InputError::Unrecognized),
    }
}

/// Renders the board with empty cells numbered 1-9.
pub fn render(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let symbol = match board.get(row, col) {
                Cell::Empty => char::from(b'1' + (row * 3 + col) as u8),
                mark => mark.symbol(),
            };
            result.push(symbol);
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

/// Interactive game between a human and the computer.
#[derive(Debug)]
pub struct Driver<R, W> {
    input: R,
    output: W,
    human: Player,
    hints: bool,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver for a human playing `human`.
    pub fn new(input: R, output: W, human: Player, hints: bool) -> Self {
        Self {
            input,
            output,
            human,
            hints,
        }
    }

    /// Plays one game to the end.
    ///
    /// Returns `None` if the human quit or input ran out first.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn run(&mut self) -> anyhow::Result<Option<Outcome>> {
        let mut game = Game::new();
        info!("Starting game");

        loop {
            let outcome = game.outcome();
            if outcome.is_terminal() {
                writeln!(self.output, "{}\n", render(game.board()))?;
                writeln!(self.output, "{}", outcome)?;
                match outcome.winner() {
                    Some(winner) if winner == self.human => {
                        writeln!(self.output, "You beat the computer.")?
                    }
                    Some(_) => writeln!(self.output, "The computer wins.")?,
                    None => {}
                }
                info!(%outcome, "Game over");
                return Ok(Some(outcome));
            }

            if game.to_move() != self.human {
                let (mv, _) = game.play_computer()?;
                writeln!(self.output, "Computer ({}) plays {}", self.human.opponent(), mv)?;
                continue;
            }

            writeln!(self.output, "{}\n", render(game.board()))?;
            if self.hints {
                self.show_hints(&game)?;
            }

            if !self.human_turn(&mut game)? {
                info!("Human left the game");
                return Ok(None);
            }
        }
    }

    /// Prompts until a legal move is played. False on quit or end of input.
    fn human_turn(&mut self, game: &mut Game) -> anyhow::Result<bool> {
        loop {
            write!(self.output, "Your move ({}): ", self.human)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }

            let mv = match parse_input(&line) {
                Ok(Input::Quit) => return Ok(false),
                Ok(Input::Move(mv)) => mv,
                Err(err) => {
                    debug!(input = line.trim(), %err, "Rejected input");
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            match game.play_as(self.human, mv) {
                Ok(_) => return Ok(true),
                Err(err @ MoveError::SquareOccupied(_)) => {
                    writeln!(self.output, "{}, try again", err)?;
                }
                Err(err) => {
                    warn!(%err, "Unexpected move error");
                    return Err(err.into());
                }
            }
        }
    }

    fn show_hints(&mut self, game: &Game) -> anyhow::Result<()> {
        let mut scratch = *game.board();
        for scored in score_moves(&mut scratch, self.human) {
            let verdict = match (scored.score, self.human) {
                (0, _) => "draw",
                (1, Player::O) | (-1, Player::X) => "win",
                _ => "loss",
            };
            writeln!(self.output, "  {} -> {}", scored.mv, verdict)?;
        }
        Ok(())
    }
}
