//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Move, Player};

/// The eight winning lines as (row, col) triples.
pub const LINES: [[Move; 3]; 8] = {
    const fn at(row: usize, col: usize) -> Move {
        Move { row, col }
    }
    [
        // Rows
        [at(0, 0), at(0, 1), at(0, 2)],
        [at(1, 0), at(1, 1), at(1, 2)],
        [at(2, 0), at(2, 1), at(2, 2)],
        // Columns
        [at(0, 0), at(1, 0), at(2, 0)],
        [at(0, 1), at(1, 1), at(2, 1)],
        [at(0, 2), at(1, 2), at(2, 2)],
        // Diagonals
        [at(0, 0), at(1, 1), at(2, 2)],
        [at(0, 2), at(1, 1), at(2, 0)],
    ]
};

/// Checks whether all three cells of some line hold the player's mark.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    LINES
        .iter()
        .any(|line| line.iter().all(|m| board.get(m.row, m.col) == mark))
}

/// Returns the player holding a complete line, if any.
///
/// O is reported first when both hold one, which only happens on boards no
/// legal game reaches.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::O, Player::X]
        .into_iter()
        .find(|&player| has_line(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(0, 0, Player::X);
        board.place(0, 1, Player::X);
        board.place(0, 2, Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.place(0, 1, Player::O);
        board.place(1, 1, Player::O);
        board.place(2, 1, Player::O);
        assert!(has_line(&board, Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(0, 2, Player::O);
        board.place(1, 1, Player::O);
        board.place(2, 0, Player::O);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(0, 0, Player::X);
        board.place(0, 1, Player::X);
        board.place(0, 2, Player::O);
        assert_eq!(check_winner(&board), None);
    }
}
