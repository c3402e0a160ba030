//! Static evaluation of positions the search cannot finish.

use crate::rules::LINES;
use crate::types::{Board, Mark, Square};

/// Score of a position the computer has won.
pub const WIN_SCORE: i32 = 100;

/// Score of a position the computer has lost.
pub const LOSS_SCORE: i32 = -100;

/// Value of two marks in a line with the third square open.
pub const THREAT_SCORE: i32 = 5;

/// Value of a completed line in the static evaluation.
pub const LINE_SCORE: i32 = 100;

/// Scores a board from O's point of view.
///
/// Per line: an open two is worth [`THREAT_SCORE`], a completed line
/// [`LINE_SCORE`]; X's lines count negatively. Completed lines are normally
/// caught by the winner check before this runs.
pub fn evaluate(board: &Board) -> i32 {
    LINES.iter().map(|line| score_line(board, line)).sum()
}

fn score_line(board: &Board, line: &[crate::position::Position; 3]) -> i32 {
    let mut o = 0;
    let mut x = 0;
    let mut empty = 0;
    for pos in line {
        match board.get(*pos) {
            Square::Occupied(Mark::O) => o += 1,
            Square::Occupied(Mark::X) => x += 1,
            Square::Empty => empty += 1,
        }
    }

    match (o, x, empty) {
        (2, _, 1) => THREAT_SCORE,
        (_, 2, 1) => -THREAT_SCORE,
        (3, _, _) => LINE_SCORE,
        (_, 3, _) => -LINE_SCORE,
        _ => 0,
    }
}
