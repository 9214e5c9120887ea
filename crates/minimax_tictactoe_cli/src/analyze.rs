//! Position analysis and computer self-play.

use minimax_tictactoe::{
    Board, Game, Move, Outcome, Player, ScoredMove, pick_best, rules, score_moves,
};
use serde::Serialize;
use std::io::Write;
use tracing::instrument;

/// Minimax report for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Position in row-major text form.
    pub board: String,
    /// Side to move.
    pub player: Player,
    /// Current outcome; moves are only scored while in progress.
    pub outcome: Outcome,
    /// Every legal move with its score.
    pub moves: Vec<ScoredMove>,
    /// The move the computer would play.
    pub best: Option<Move>,
}

/// Scores the position for `player`.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: Board, player: Player) -> Analysis {
    let outcome = rules::outcome(&board);
    let mut scratch = board;
    let moves = if outcome.is_terminal() {
        Vec::new()
    } else {
        score_moves(&mut scratch, player)
    };
    let best = pick_best(&moves, player);

    Analysis {
        board: board.to_string().replace('\n', "/"),
        player,
        outcome,
        moves,
        best,
    }
}

/// Writes the report as text or JSON.
pub fn write_analysis(
    out: &mut impl Write,
    analysis: &Analysis,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(analysis)?)?;
        return Ok(());
    }

    writeln!(out, "{} to move on {}", analysis.player, analysis.board)?;
    writeln!(out, "Outcome: {}", analysis.outcome)?;
    for scored in &analysis.moves {
        writeln!(out, "  {} score {:+}", scored.mv, scored.score)?;
    }
    match analysis.best {
        Some(mv) => writeln!(out, "Best move: {}", mv)?,
        None => writeln!(out, "No move to play")?,
    }
    Ok(())
}

/// Lets the computer play both sides and reports each move.
#[instrument(skip(out))]
pub fn selfplay(out: &mut impl Write) -> anyhow::Result<Outcome> {
    let mut game = Game::new();
    while !game.outcome().is_terminal() {
        let player = game.to_move();
        let (mv, _) = game.play_computer()?;
        writeln!(out, "{} plays {}", player, mv)?;
    }

    let outcome = game.outcome();
    writeln!(out, "{}\n{}", game.board(), outcome)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_of_forced_block() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        let analysis = analyze(board, Player::O);
        assert_eq!(analysis.best, Some(Move::new(2, 2)));
        assert_eq!(analysis.moves.len(), 6);
        assert_eq!(analysis.board, "X.O/.X./...");
    }

    #[test]
    fn test_analysis_agrees_with_search() {
        for text in ["X../.O./..X", "XO./.O./X..", "........."] {
            let board: Board = text.parse().unwrap();
            for player in [Player::X, Player::O] {
                let analysis = analyze(board, player);
                let mut scratch = board;
                assert_eq!(
                    analysis.best,
                    minimax_tictactoe::best_move_for(&mut scratch, player),
                    "{text} {player}"
                );
            }
        }
    }

    #[test]
    fn test_analysis_of_finished_position() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let analysis = analyze(board, Player::O);
        assert_eq!(analysis.outcome, Outcome::Win(Player::X));
        assert!(analysis.moves.is_empty());
        assert_eq!(analysis.best, None);

        let mut text = Vec::new();
        write_analysis(&mut text, &analysis, false).unwrap();
        assert!(String::from_utf8(text).unwrap().contains("No move to play"));
    }

    #[test]
    fn test_analysis_json() {
        let analysis = analyze(Board::new(), Player::X);
        let mut out = Vec::new();
        write_analysis(&mut out, &analysis, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["best"]["row"], 0);
        assert_eq!(value["best"]["col"], 0);
        assert_eq!(value["moves"].as_array().unwrap().len(), 9);
        assert_eq!(value["outcome"], "InProgress");
    }

    #[test]
    fn test_selfplay_draws() {
        let mut out = Vec::new();
        assert_eq!(selfplay(&mut out).unwrap(), Outcome::Draw);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("X plays (0, 0)\nO plays (1, 1)"));
        assert_eq!(text.lines().filter(|l| l.contains(" plays ")).count(), 9);
    }
}
