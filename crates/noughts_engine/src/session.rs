//! Game sessions: turn order, move validation and game status.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules::{find_winner, is_full};
use crate::search::{Difficulty, SearchConfig, Searcher, COMPUTER};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameMode {
    /// A human plays X against the computer.
    #[display("AI ({})", _0)]
    VsComputer(Difficulty),
    /// Two humans share the board.
    #[display("Two Players")]
    TwoPlayer,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Mark,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// One game from empty board to result.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
    mode: GameMode,
    search: Option<SearchConfig>,
    started: Instant,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        let search = match mode {
            GameMode::VsComputer(difficulty) => Some(SearchConfig::from(difficulty)),
            GameMode::TwoPlayer => None,
        };
        info!(%mode, "Starting new game");
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            mode,
            search,
            started: Instant::now(),
        }
    }

    /// Makes a move for the player whose turn it is.
    ///
    /// In a game against the computer only X's moves come through here;
    /// O's moves come from [`Game::computer_move`].
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::WrongPlayer(self.to_move));
        }
        self.apply(pos)
    }

    /// Lets the computer choose and play O's move.
    ///
    /// Returns the position played, or `None` if the search found no move.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Option<Position>, MoveError> {
        let config = self.search.ok_or(MoveError::NoComputer)?;
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != COMPUTER {
            return Err(MoveError::WrongPlayer(self.to_move));
        }

        let result = Searcher::new(config).search(&self.board);
        let Some(pos) = result.best_move else {
            return Ok(None);
        };

        debug!(position = %pos, score = result.score, "Computer chose move");
        self.apply(pos)?;
        Ok(Some(pos))
    }

    fn apply(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.place(pos, player);
        self.history.push(Move::new(player, pos));

        self.status = if let Some(winner) = find_winner(&self.board) {
            GameStatus::Won(winner)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            self.to_move = player.opponent();
            GameStatus::InProgress
        };

        debug!(%player, position = %pos, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winner, if the game has one.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// True when the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.search.is_some() && !self.is_over() && self.to_move == COMPUTER
    }

    /// Time since the game started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
