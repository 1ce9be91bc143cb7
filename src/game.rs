//! Game state snapshots and the engine that owns them.

use crate::board::{Board, Cell, Mark};
use crate::common::MoveError;

/// Current status of a game. `Won` and `Draw` are terminal: only a reset
/// leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    /// `true` once the game has ended in a win or draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Immutable snapshot of a game at one point in time.
///
/// Snapshots are plain `Copy` values. The engine replaces its snapshot
/// wholesale on every accepted move, so a copy handed to a frontend earlier
/// stays valid and unchanged, and two snapshots compare cheaply by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    board: Board,
    active_player: Mark,
    status: GameStatus,
}

impl GameState {
    /// Fresh game: empty board, X to move.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            active_player: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark of the player to move next. On a finished game this stays on
    /// the player who made the final move.
    pub fn active_player(&self) -> Mark {
        self.active_player
    }

    /// The game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply a move intent, producing the successor snapshot.
    ///
    /// Preconditions are checked in a fixed order: the game must still be in
    /// progress, the coordinate must lie on the board, and the target cell
    /// must be empty. The receiver is never modified; same inputs always
    /// yield the same output.
    pub fn with_move(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(row, col)? {
            Cell::Empty => {}
            Cell::Marked(_) => return Err(MoveError::CellOccupied),
        }
        // While in progress, the stored turn must agree with the parity
        // derived from mark counts.
        debug_assert_eq!(self.active_player, self.board.turn_from_counts());

        let mover = self.active_player;
        let board = self.board.with_cell(row, col, Cell::Marked(mover))?;
        let status = if let Some(mark) = board.winner() {
            GameStatus::Won(mark)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        // No turn flip once the game is decided.
        let active_player = if status.is_terminal() {
            mover
        } else {
            mover.opponent()
        };
        Ok(GameState {
            board,
            active_player,
            status,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the authoritative [`GameState`] and exposes the only operations that
/// replace it: applying a move and resetting the game.
///
/// The engine is the sole writer. Frontends read `Copy` snapshots via
/// [`GameEngine::state`] and re-poll after dispatching an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Create an engine holding a fresh game.
    pub fn new() -> Self {
        GameEngine {
            state: GameState::new(),
        }
    }

    /// Copy of the current snapshot.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Validate and apply a move for the active player, replacing the owned
    /// snapshot on success and returning the new one. A rejected move leaves
    /// the snapshot untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameState, MoveError> {
        let next = self.state.with_move(row, col)?;
        self.state = next;
        Ok(next)
    }

    /// Discard the current game and start over from the initial state,
    /// regardless of prior history.
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::new();
        self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
