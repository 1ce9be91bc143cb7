//! Common types: the move error taxonomy shared by the engine and frontends.

/// Errors returned when a move intent is rejected.
///
/// All variants are recoverable. A rejected move leaves the game state
/// untouched; the caller decides how to present the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column lies outside the board. Indicates a frontend bug, since
    /// a correct frontend never offers such a coordinate.
    OutOfBounds,
    /// Target cell already carries a mark.
    CellOccupied,
    /// The game has already ended in a win or draw.
    GameOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            MoveError::CellOccupied => write!(f, "Cell is already marked"),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}
