//! The 3x3 grid and its move discipline.

use crate::error::BoardParseError;
use crate::rules;
use crate::types::{Cell, Move, Player, SIZE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board indexed by (row, column).
///
/// Coordinates outside `0..3` panic; they are a programming error, never
/// clamped. The board only refuses to overwrite an occupied cell. Turn
/// alternation is the driver's responsibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Checks if the cell at (row, col) holds no mark.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Places the player's mark if the cell is empty.
    ///
    /// Returns false, leaving the board unchanged, when the cell is occupied.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.is_empty(row, col) {
            return false;
        }
        self.cells[row][col] = player.mark();
        true
    }

    /// Resets a cell to empty.
    ///
    /// Only meant for undoing a placement made by the same caller, as the
    /// search does when it backtracks.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// Checks whether the player holds a full row, column or diagonal.
    pub fn winner(&self, player: Player) -> bool {
        rules::has_line(self, player)
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns every empty cell in row-major order.
    ///
    /// The order decides which of several equally scored moves the search
    /// picks.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Empty)
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        (0..SIZE).flat_map(move |row| {
            (0..SIZE).map(move |col| (Move { row, col }, self.cells[row][col]))
        })
    }

    /// Counts the cells holding the player's mark.
    pub fn mark_count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == player.mark())
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `-`, `_` and space are empty.
    /// `/`, `|`, `,` and line breaks separate rows and are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for ch in s.chars() {
            let cell = match ch {
                '/' | '|' | ',' | '\n' | '\r' => continue,
                'x' | 'X' => Cell::MarkX,
                'o' | 'O' => Cell::MarkO,
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (index, cell) in cells.into_iter().enumerate() {
            board.cells[index / SIZE][index % SIZE] = cell;
        }
        Ok(board)
    }
}
