//! Noughts - command-line shell for the noughts engine
//!
//! The engine owns the rules and the computer opponent; this crate only
//! loads configuration and moves text between the user and a game.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod commands;
mod config;
mod shell;

pub use commands::{run_analyze, run_move, MoveReport};
pub use config::{AppConfig, ConfigError};
pub use shell::Shell;
