//! Noughts engine - tic-tac-toe rules and a minimax computer opponent
//!
//! # Architecture
//!
//! - **Rules**: pure board queries (winner, full board, empty squares)
//! - **Search**: minimax with alpha-beta pruning choosing O's move
//! - **Session**: turn order and move validation for a whole game
//! - **Stats / Log**: in-memory tallies and event history for a shell
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Difficulty, Game, GameMode, Position};
//!
//! let mut game = Game::new(GameMode::VsComputer(Difficulty::Hard));
//! game.make_move(Position::TopLeft)?;
//! let reply = game.computer_move()?;
//! assert_eq!(reply, Some(Position::Center));
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod log;
mod position;
mod rules;
mod search;
mod session;
mod stats;
mod types;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Mark, Square};

// Crate-level exports - Rules
pub use rules::{empty_cells, find_winner, is_draw, is_full, LINES};

// Crate-level exports - Search
pub use search::{
    evaluate, select_move, Difficulty, SearchConfig, SearchResult, SearchStats, Searcher,
    COMPUTER, LINE_SCORE, LOSS_SCORE, THREAT_SCORE, WIN_SCORE,
};

// Crate-level exports - Sessions
pub use session::{Game, GameMode, GameStatus, Move};

// Crate-level exports - Statistics and log
pub use log::{GameLog, LogEntry};
pub use stats::Statistics;

// Crate-level exports - Errors
pub use error::{MoveError, ParseBoardError};
