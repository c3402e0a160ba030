//! Legal move enumeration.

use crate::position::Position;
use crate::types::Board;

/// Returns the empty positions in ascending index order.
///
/// This order is the search's move order, so it decides which of several
/// equally good moves the computer plays.
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_has_all_cells() {
        assert_eq!(empty_cells(&Board::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_filters_occupied_in_ascending_order() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.place(Position::Center, Mark::O);

        let cells: Vec<usize> = empty_cells(&board).into_iter().map(Position::to_index).collect();
        assert_eq!(cells, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_full_board_has_none() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert!(empty_cells(&board).is_empty());
    }
}
