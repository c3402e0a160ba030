//! Noughts - command-line tic-tac-toe
//!
//! Play against the computer, or ask it for a move on any board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{run_analyze, run_move, AppConfig, Shell};
use noughts_engine::{Board, Difficulty, GameMode, SearchConfig};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    initialize_tracing(&config);
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Move {
            board,
            difficulty,
            depth,
            json,
        } => run_move_command(&config, board, difficulty, depth, json),
        Command::Analyze { board, depth } => run_analyze_command(board, depth),
        Command::Play {
            difficulty,
            two_player,
        } => run_play(config, difficulty, two_player),
    }
}

/// Logs go to stderr; stdout carries game output.
fn initialize_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print the computer's move for a board
#[instrument(skip(config))]
fn run_move_command(
    config: &AppConfig,
    board: Board,
    difficulty: Option<Difficulty>,
    depth: Option<u32>,
    json: bool,
) -> Result<()> {
    let search = match (depth, difficulty) {
        (Some(depth), _) => SearchConfig::with_depth(depth),
        (None, Some(difficulty)) => SearchConfig::from(difficulty),
        (None, None) => SearchConfig::from(*config.difficulty()),
    };
    info!(depth = search.depth(), "Selecting move");
    run_move(&board, search, json, &mut std::io::stdout().lock())
}

/// Print every reply with its score
#[instrument]
fn run_analyze_command(board: Board, depth: u32) -> Result<()> {
    run_analyze(&board, depth, &mut std::io::stdout().lock())
}

/// Run the interactive game loop
#[instrument(skip(config))]
fn run_play(config: AppConfig, difficulty: Option<Difficulty>, two_player: bool) -> Result<()> {
    let config = match difficulty {
        Some(difficulty) => config.with_difficulty(difficulty),
        None => config,
    };
    let mode = if two_player {
        GameMode::TwoPlayer
    } else {
        GameMode::VsComputer(*config.difficulty())
    };

    info!(%mode, "Starting interactive play");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Shell::new(stdin, stdout, config).run(mode)
}
