//! Core domain types for tic-tac-toe.

use crate::error::ParseBoardError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (the computer when playing against the machine).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: copies are independent, so the search can explore a
/// working copy without touching the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places a mark at the given position.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.set(pos, Square::Occupied(mark));
    }

    /// Empties the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
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

    /// Compact one-line notation, e.g. `XX_O_____`.
    pub fn notation(&self) -> String {
        self.squares
            .iter()
            .map(|square| match square {
                Square::Empty => '_',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells of `X`, `O` and `_`/`.`/`-`/digit for empty.
    ///
    /// Whitespace, `/` and `|` are ignored so rows may be separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;

        for c in s.chars() {
            if c.is_whitespace() || c == '/' || c == '|' {
                continue;
            }
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '_' | '.' | '-' => Square::Empty,
                d if d.is_ascii_digit() => Square::Empty,
                other => {
                    return Err(ParseBoardError::new(format!(
                        "Unexpected character '{}' in board '{}'",
                        other, s
                    )));
                }
            };
            if count == 9 {
                return Err(ParseBoardError::new(format!(
                    "Board '{}' has more than 9 cells",
                    s
                )));
            }
            squares[count] = square;
            count += 1;
        }

        if count != 9 {
            return Err(ParseBoardError::new(format!(
                "Board '{}' has {} cells, expected 9",
                s, count
            )));
        }

        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact() {
        let board: Board = "XX_O_____".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopRight), Square::Empty);
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "x.o / ... | 7 8 9".parse().unwrap();
        assert_eq!(board.notation(), "X_O______");
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        assert!("XX?O_____".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XXO".parse::<Board>().is_err());
        assert!("XXO______X".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_shows_keypad_numbers() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X);
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_copy_is_independent() {
        let board = Board::new();
        let mut copy = board;
        copy.place(Position::Center, Mark::O);
        assert!(board.is_empty(Position::Center));
        copy.clear(Position::Center);
        assert_eq!(copy, board);
    }
}
