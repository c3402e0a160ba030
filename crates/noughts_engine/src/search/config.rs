//! Difficulty levels and search configuration.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How hard the computer plays.
///
/// Each level maps to a fixed search depth in plies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Looks two plies past its own move.
    Easy,
    /// Looks four plies past its own move.
    #[default]
    Medium,
    /// Looks six plies past its own move; never loses.
    Hard,
}

impl Difficulty {
    /// Maximum search depth for this level.
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }
}

/// Parameters for one game's searches.
///
/// Built once when a game starts and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    depth: u32,
    pruning: bool,
}

impl SearchConfig {
    /// Alpha-beta search to the given depth.
    #[instrument]
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            pruning: true,
        }
    }

    /// Plain minimax to the given depth, visiting every node.
    #[instrument]
    pub fn unpruned(depth: u32) -> Self {
        Self {
            depth,
            pruning: false,
        }
    }

    /// Depth limit in plies below the root move.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether alpha-beta cutoffs are taken.
    pub fn pruning(&self) -> bool {
        self.pruning
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::with_depth(difficulty.depth())
    }
}
