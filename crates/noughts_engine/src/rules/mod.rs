//! Game rules for tic-tac-toe.
//!
//! Pure functions of a board value. Rules are separated from board
//! storage so the search and the game session share one definition.

pub mod draw;
pub mod lines;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::LINES;
pub use moves::empty_cells;
pub use win::find_winner;
