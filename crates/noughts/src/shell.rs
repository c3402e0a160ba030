//! Line-based game loop over any reader and writer.

use crate::config::AppConfig;
use anyhow::Result;
use noughts_engine::{Game, GameLog, GameMode, GameStatus, Mark, Position, Statistics};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Interactive shell: plays games until the user stops.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: AppConfig,
    stats: Statistics,
    log: GameLog,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
            stats: Statistics::new(),
            log: GameLog::new(),
        }
    }

    /// Totals for the games played so far.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Events logged so far.
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Consumes the shell, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games in `mode` until the user quits or declines a rematch,
    /// then prints the session statistics.
    #[instrument(skip(self))]
    pub fn run(&mut self, mode: GameMode) -> Result<()> {
        info!("Starting shell");

        while let Some(status) = self.play_game(mode)? {
            debug!(?status, "Game finished");
            if !self.ask_play_again()? {
                break;
            }
        }

        self.print_summary()?;
        Ok(())
    }

    /// Plays one game. Returns `None` if the user quit before the end.
    #[instrument(skip(self))]
    fn play_game(&mut self, mode: GameMode) -> Result<Option<GameStatus>> {
        let mut game = Game::new(mode);
        self.log.add(format!("Started new game: {}", mode));
        writeln!(self.output, "New game: {}", mode)?;

        while !game.is_over() {
            writeln!(self.output, "\n{}\n", game.board().display())?;

            if game.is_computer_turn() {
                self.computer_turn(&mut game)?;
                continue;
            }

            write!(self.output, "{}, choose a square (1-9) or q to quit: ", turn_label(&game))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed mid-game");
                self.abandon(&game);
                return Ok(None);
            };

            if line.eq_ignore_ascii_case("q") {
                self.abandon(&game);
                return Ok(None);
            }

            match Position::parse_input(&line) {
                Some(pos) => {
                    if let Err(e) = game.make_move(pos) {
                        warn!(error = %e, "Move rejected");
                        writeln!(self.output, "{}", e)?;
                    }
                }
                None => writeln!(self.output, "Unrecognised square '{}'", line)?,
            }
        }

        writeln!(self.output, "\n{}\n", game.board().display())?;
        let status = game.status();
        let (message, log_message) = outcome_messages(mode, status);
        writeln!(self.output, "{}", message)?;
        self.log.add(log_message);
        self.stats.record(status, game.elapsed());

        Ok(Some(status))
    }

    fn computer_turn(&mut self, game: &mut Game) -> Result<()> {
        writeln!(self.output, "AI is thinking...")?;
        let delay = *self.config.think_delay_ms();
        if delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }

        if let Some(pos) = game.computer_move()? {
            writeln!(self.output, "AI played {} ({})", pos, pos.to_index() + 1)?;
        }
        Ok(())
    }

    fn abandon(&mut self, game: &Game) {
        self.log.add("Game abandoned");
        self.stats.record(GameStatus::InProgress, game.elapsed());
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        write!(self.output, "Play again? [y/N]: ")?;
        self.output.flush()?;
        Ok(matches!(
            self.read_line()?.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("y" | "yes")
        ))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_summary(&mut self) -> Result<()> {
        let stats = &self.stats;
        writeln!(self.output, "\nGames played: {}", stats.games())?;
        writeln!(self.output, "X wins: {}", stats.x_wins())?;
        writeln!(self.output, "O wins: {}", stats.o_wins())?;
        writeln!(self.output, "Draws: {}", stats.draws())?;
        writeln!(self.output, "Time played: {}", stats.total_time_label())?;
        Ok(())
    }
}

fn turn_label(game: &Game) -> &'static str {
    match (game.mode(), game.to_move()) {
        (GameMode::VsComputer(_), _) => "Your move",
        (GameMode::TwoPlayer, Mark::X) => "Player X",
        (GameMode::TwoPlayer, Mark::O) => "Player O",
    }
}

/// Screen message and log message for a finished game.
fn outcome_messages(mode: GameMode, status: GameStatus) -> (&'static str, &'static str) {
    let vs_computer = matches!(mode, GameMode::VsComputer(_));
    match status {
        GameStatus::Won(Mark::X) if vs_computer => ("You won!", "Player X won the game"),
        GameStatus::Won(Mark::X) => ("Player X wins!", "Player X won the game"),
        GameStatus::Won(Mark::O) if vs_computer => ("AI wins!", "AI won the game"),
        GameStatus::Won(Mark::O) => ("Player O wins!", "Player O won the game"),
        GameStatus::Draw | GameStatus::InProgress => ("It's a draw!", "Game ended in a draw"),
    }
}
