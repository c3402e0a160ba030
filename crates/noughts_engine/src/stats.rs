//! Running tally of finished games.

use crate::session::GameStatus;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Totals across the games of a session.
///
/// Kept in memory; the serde derives let a caller store it however it likes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Statistics {
    /// Finished games.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Time spent at the board, including abandoned games.
    total_time: Duration,
}

impl Statistics {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a game and adds its playing time.
    ///
    /// An unfinished game only contributes its time.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus, elapsed: Duration) {
        self.total_time += elapsed;
        match status {
            GameStatus::InProgress => return,
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
        }
        self.games += 1;
        debug!(games = self.games, "Game recorded");
    }

    /// Total time formatted as hours and minutes, e.g. `1h 05m`.
    pub fn total_time_label(&self) -> String {
        let secs = self.total_time.as_secs();
        format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_outcome() {
        let mut stats = Statistics::new();
        stats.record(GameStatus::Won(Mark::X), Duration::from_secs(30));
        stats.record(GameStatus::Won(Mark::O), Duration::from_secs(30));
        stats.record(GameStatus::Won(Mark::O), Duration::from_secs(30));
        stats.record(GameStatus::Draw, Duration::from_secs(30));

        assert_eq!(*stats.games(), 4);
        assert_eq!(*stats.x_wins(), 1);
        assert_eq!(*stats.o_wins(), 2);
        assert_eq!(*stats.draws(), 1);
        assert_eq!(*stats.total_time(), Duration::from_secs(120));
    }

    #[test]
    fn test_abandoned_game_adds_time_only() {
        let mut stats = Statistics::new();
        stats.record(GameStatus::InProgress, Duration::from_secs(90));
        assert_eq!(*stats.games(), 0);
        assert_eq!(*stats.total_time(), Duration::from_secs(90));
    }

    #[test]
    fn test_time_label() {
        let mut stats = Statistics::new();
        assert_eq!(stats.total_time_label(), "0h 00m");
        stats.record(GameStatus::Draw, Duration::from_secs(3600 + 5 * 60 + 59));
        assert_eq!(stats.total_time_label(), "1h 05m");
    }
}
