//! Search module for the computer opponent.
//!
//! Contains:
//! - Difficulty levels and the search configuration derived from them
//! - Static heuristic evaluation of unfinished positions
//! - Minimax search with optional alpha-beta pruning

pub mod config;
pub mod eval;
pub mod minimax;

pub use config::{Difficulty, SearchConfig};
pub use eval::{evaluate, LINE_SCORE, LOSS_SCORE, THREAT_SCORE, WIN_SCORE};
pub use minimax::{select_move, SearchResult, SearchStats, Searcher, COMPUTER};
