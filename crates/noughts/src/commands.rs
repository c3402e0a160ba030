//! One-shot commands: pick a move, or score every reply.

use anyhow::Result;
use noughts_engine::{Board, SearchConfig, Searcher};
use serde::Serialize;
use std::io::Write;
use tracing::instrument;

/// Machine-readable answer of the `move` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Chosen square (0-8), or null when the board is full.
    #[serde(rename = "move")]
    pub best_move: Option<usize>,
    /// Score of the chosen move from O's point of view.
    pub score: i32,
    /// Positions visited.
    pub nodes: u64,
    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,
}

/// Prints O's move for `board` as an index, or `none`.
#[instrument(skip(board, out), fields(board = %board))]
pub fn run_move(board: &Board, config: SearchConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let result = Searcher::new(config).search(board);
    let report = MoveReport {
        best_move: result.best_move.map(|pos| pos.to_index()),
        score: result.score,
        nodes: result.stats.nodes,
        cutoffs: result.stats.cutoffs,
    };

    if json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        match report.best_move {
            Some(index) => writeln!(out, "{}", index)?,
            None => writeln!(out, "none")?,
        }
    }
    Ok(())
}

/// Prints every legal O move with its exact score, best first.
///
/// Equal scores keep ascending index order, so the first line is the move
/// the computer would play.
#[instrument(skip(board, out), fields(board = %board))]
pub fn run_analyze(board: &Board, depth: u32, out: &mut impl Write) -> Result<()> {
    let mut scores = Searcher::new(SearchConfig::with_depth(depth)).root_scores(board);
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    if scores.is_empty() {
        writeln!(out, "No legal moves")?;
    }
    for (pos, score) in scores {
        writeln!(out, "{} {:<13} {:>5}", pos.to_index(), pos.label(), score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_move_plain() {
        let board: Board = "XX_O_____".parse().unwrap();
        let text = output(|out| run_move(&board, SearchConfig::with_depth(4), false, out));
        assert_eq!(text, "2\n");
    }

    #[test]
    fn test_move_full_board() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        let text = output(|out| run_move(&board, SearchConfig::with_depth(4), false, out));
        assert_eq!(text, "none\n");
    }

    #[test]
    fn test_move_json() {
        let board: Board = "OO_XX____".parse().unwrap();
        let text = output(|out| run_move(&board, SearchConfig::with_depth(2), true, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["move"], 2);
        assert_eq!(value["score"], 100);
        assert!(value["nodes"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_analyze_orders_best_first() {
        let board: Board = "OO_XX____".parse().unwrap();
        let text = output(|out| run_analyze(&board, 2, out));
        let firsts: Vec<&str> = text.lines().map(|l| l.split_whitespace().next().unwrap()).collect();
        assert_eq!(firsts, vec!["2", "5", "6", "7", "8"]);
        assert!(text.lines().next().unwrap().ends_with("100"));
    }
}
