//! Intents sent from a frontend into the session.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::board::Mark;

/// User-originated requests forwarded by a frontend.
///
/// The engine never sees raw input events; a frontend translates clicks or
/// keystrokes into one of these and dispatches it through the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Mark the cell at the given coordinates for the active player.
    Move { row: usize, col: usize },
    /// Discard the current game and start a fresh one.
    NewGame,
    /// Change the display name of one player slot.
    Rename { mark: Mark, name: String },
}
