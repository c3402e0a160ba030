//! Win detection logic for tic-tac-toe.

use super::lines::LINES;
use crate::types::{Board, Mark, Square};

/// Returns the mark holding a complete line, if any.
///
/// Lines are scanned in [`LINES`] order and the first complete one wins,
/// so a degenerate board with several complete lines still gives a
/// deterministic answer.
pub fn find_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.mark()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.place(*pos, mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(mark, &line);
                assert_eq!(find_winner(&board), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.place(Position::TopRight, Mark::O);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_degenerate_board_prefers_rows() {
        // O holds row 0, X holds row 2: the row scanned first wins.
        let board: Board = "OOO___XXX".parse().unwrap();
        assert_eq!(find_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_full_board_without_line() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(find_winner(&board), None);
    }
}
