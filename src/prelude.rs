//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Cell, GameEngine, GameSession, GameState, GameStatus, Intent, Mark, MoveError,
    PlayerSlot, Roster,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui};
