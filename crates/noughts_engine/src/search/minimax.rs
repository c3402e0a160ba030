//! Minimax search with alpha-beta pruning.
//!
//! The computer always plays [`COMPUTER`] (O) and maximizes; X is assumed
//! to minimize. Moves are tried in ascending index order and a move only
//! replaces the current best on a strictly greater score, so among equal
//! moves the lowest index is played.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{select_move, Board};
//!
//! // X threatens the top row; O blocks at index 2.
//! let board: Board = "XX_O_____".parse().unwrap();
//! let best = select_move(&board, 4).map(|pos| pos.to_index());
//! assert_eq!(best, Some(2));
//! ```

use super::config::SearchConfig;
use super::eval::{evaluate, LOSS_SCORE, WIN_SCORE};
use crate::position::Position;
use crate::rules::{empty_cells, find_winner, is_full};
use crate::types::{Board, Mark};
use serde::Serialize;
use tracing::{debug, instrument};

/// The mark the search plays for.
pub const COMPUTER: Mark = Mark::O;

/// Search counters for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited below the root.
    pub nodes: u64,
    /// Sibling loops abandoned because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Chosen move; `None` only when the board has no empty square.
    pub best_move: Option<Position>,
    /// Score of the chosen move from O's point of view.
    pub score: i32,
    /// Search diagnostics.
    pub stats: SearchStats,
}

/// Move selector for the computer player.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher for one game's configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// The configuration this searcher was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Chooses O's move on `board`.
    ///
    /// The caller's board is never modified; exploration happens on a
    /// private copy that is restored after every hypothetical placement.
    #[instrument(skip(self, board), fields(board = %board, depth = self.config.depth(), pruning = self.config.pruning()))]
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.stats = SearchStats::default();

        let moves = empty_cells(board);
        let Some(&first) = moves.first() else {
            debug!("No empty squares, no move to make");
            return SearchResult {
                best_move: None,
                score: evaluate(board),
                stats: self.stats,
            };
        };

        let mut work = *board;
        let mut best_move = first;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;

        for pos in moves {
            work.place(pos, COMPUTER);
            let score = self.minimax(&mut work, self.config.depth(), false, alpha, i32::MAX);
            work.clear(pos);

            if score > best_score {
                best_score = score;
                best_move = pos;
            }
            if self.config.pruning() {
                alpha = alpha.max(best_score);
            }
        }

        debug!(
            best_move = %best_move,
            score = best_score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );

        SearchResult {
            best_move: Some(best_move),
            score: best_score,
            stats: self.stats,
        }
    }

    /// Exact minimax value of every legal O move, in ascending order.
    ///
    /// Each move is searched with a full window, so the scores are exact
    /// even when pruning is enabled.
    #[instrument(skip(self, board), fields(board = %board, depth = self.config.depth()))]
    pub fn root_scores(&mut self, board: &Board) -> Vec<(Position, i32)> {
        self.stats = SearchStats::default();

        let mut work = *board;
        empty_cells(board)
            .into_iter()
            .map(|pos| {
                work.place(pos, COMPUTER);
                let score = self.minimax(&mut work, self.config.depth(), false, i32::MIN, i32::MAX);
                work.clear(pos);
                (pos, score)
            })
            .collect()
    }

    /// Scores `board` with `depth` plies left, `maximizing` when O is to move.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        // A finished line outranks the depth limit.
        if let Some(winner) = find_winner(board) {
            return if winner == COMPUTER {
                WIN_SCORE
            } else {
                LOSS_SCORE
            };
        }

        if depth == 0 || is_full(board) {
            return evaluate(board);
        }

        let mover = if maximizing {
            COMPUTER
        } else {
            COMPUTER.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in empty_cells(board) {
            board.place(pos, mover);
            let score = self.minimax(board, depth - 1, !maximizing, alpha, beta);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.config.pruning() && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Chooses O's move on `board`, searching `depth_limit` plies past it.
///
/// Returns `None` only when the board has no empty square.
pub fn select_move(board: &Board, depth_limit: u32) -> Option<Position> {
    Searcher::new(SearchConfig::with_depth(depth_limit))
        .search(board)
        .best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::config::Difficulty;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn index(board: &Board, depth: u32) -> Option<usize> {
        select_move(board, depth).map(Position::to_index)
    }

    #[test]
    fn test_empty_board_opens_top_left() {
        assert_eq!(index(&Board::new(), 6), Some(0));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        for depth in 1..=6 {
            assert_eq!(index(&board("XX_O_____"), depth), Some(2), "depth {}", depth);
        }
    }

    #[test]
    fn test_takes_win_over_block() {
        for depth in 0..=6 {
            assert_eq!(index(&board("OO_XX____"), depth), Some(2), "depth {}", depth);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let full = board("XOXOXOOXO");
        assert_eq!(select_move(&full, 6), None);
        let result = Searcher::new(SearchConfig::with_depth(6)).search(&full);
        assert_eq!(result.best_move, None);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_single_empty_square_is_chosen() {
        assert_eq!(index(&board("XOXOXOOX_"), 2), Some(8));
        assert_eq!(index(&board("_OXXOOOXX"), 6), Some(0));
    }

    #[test]
    fn test_depth_changes_opening_reply() {
        let corner = board("X________");
        assert_eq!(index(&corner, 0), Some(1));
        assert_eq!(index(&corner, 2), Some(4));
        assert_eq!(index(&corner, 6), Some(4));
    }

    #[test]
    fn test_caller_board_untouched() {
        let original = board("X___O___X");
        let copy = original;
        let _ = select_move(&original, 6);
        assert_eq!(original, copy);
    }

    #[test]
    fn test_winning_move_scores_win() {
        let result = Searcher::new(SearchConfig::from(Difficulty::Easy)).search(&board("OO_XX____"));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_pruning_cuts_and_saves_nodes() {
        let empty = Board::new();
        let mut pruned = Searcher::new(SearchConfig::with_depth(6));
        let mut plain = Searcher::new(SearchConfig::unpruned(6));

        let a = pruned.search(&empty);
        let b = plain.search(&empty);

        assert_eq!(a.best_move, b.best_move);
        assert!(a.stats.cutoffs > 0);
        assert_eq!(b.stats.cutoffs, 0);
        assert!(a.stats.nodes < b.stats.nodes);
    }

    #[test]
    fn test_root_scores_exact_values() {
        let position = board("OO_XX____");
        let scores = Searcher::new(SearchConfig::with_depth(2)).root_scores(&position);
        let by_index: Vec<(usize, i32)> = scores.iter().map(|(pos, s)| (pos.to_index(), *s)).collect();
        assert_eq!(by_index, vec![(2, 100), (5, 0), (6, -100), (7, -100), (8, -100)]);
    }

    #[test]
    fn test_all_moves_lose_still_picks_lowest_index() {
        // X can fork whatever O does, so every reply scores a loss at
        // depth 4 and the block at 2 wins only on index order.
        let position = board("XX_O_____");
        let scores = Searcher::new(SearchConfig::with_depth(4)).root_scores(&position);
        let cells: Vec<usize> = scores.iter().map(|(pos, _)| pos.to_index()).collect();
        assert_eq!(cells, vec![2, 4, 5, 6, 7, 8]);
        assert!(scores.iter().all(|(_, s)| *s == LOSS_SCORE));
        assert_eq!(index(&position, 4), Some(2));
    }
}
