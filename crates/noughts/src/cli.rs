//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_engine::{Board, Difficulty};

/// Noughts - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the square (0-8) the computer would play as O
    Move {
        /// Board as nine cells of X, O and _ (row-major, e.g. "XX_O_____")
        #[arg(short, long)]
        board: Board,

        /// Difficulty level (easy, medium, hard)
        #[arg(short, long, conflicts_with = "depth")]
        difficulty: Option<Difficulty>,

        /// Explicit search depth in plies
        #[arg(long)]
        depth: Option<u32>,

        /// Print a JSON report with score and node counts
        #[arg(long)]
        json: bool,
    },

    /// Print every legal reply for O with its score
    Analyze {
        /// Board as nine cells of X, O and _ (row-major)
        #[arg(short, long)]
        board: Board,

        /// Search depth in plies
        #[arg(long, default_value = "6")]
        depth: u32,
    },

    /// Play in the terminal (squares are numbered 1-9)
    Play {
        /// Difficulty level (easy, medium, hard)
        #[arg(short, long, conflicts_with = "two_player")]
        difficulty: Option<Difficulty>,

        /// Two humans take turns instead of playing the computer
        #[arg(long)]
        two_player: bool,
    },
}
