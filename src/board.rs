//! Board value types and winning-line scanning.

use crate::common::MoveError;
use crate::config::{BOARD_SIZE, NUM_CELLS, WIN_LINES};
use core::fmt;

/// Mark owned by one of the two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One square of the grid. A marked cell never reverts to empty except by
/// starting a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Marked(Mark),
}

/// 3×3 grid in row-major order.
///
/// A `Board` is a plain `Copy` value. Accepted moves produce a new board via
/// [`Board::with_cell`]; the original is never touched, so any copy handed
/// out earlier stays valid for diffing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Cell at (`row`, `col`). Bounds are checked.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }
        Ok(self.cells[row * BOARD_SIZE + col])
    }

    /// Copy of this board with (`row`, `col`) replaced by `cell`.
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Result<Board, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }
        let mut next = *self;
        next.cells[row * BOARD_SIZE + col] = cell;
        Ok(next)
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of marks on the board, as `(x_count, o_count)`.
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for cell in self.cells.iter() {
            match cell {
                Cell::Marked(Mark::X) => x += 1,
                Cell::Marked(Mark::O) => o += 1,
                Cell::Empty => {}
            }
        }
        (x, o)
    }

    /// Mark to move next, derived from mark counts alone: X leads by one
    /// mark exactly when it is O's turn.
    pub fn turn_from_counts(&self) -> Mark {
        let (x, o) = self.mark_counts();
        if x > o {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Scan the eight winning lines for three of a kind.
    ///
    /// A move adds exactly one mark, so at most one player can hold a
    /// completed line when this runs; first match is the only match.
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in WIN_LINES {
            if let Cell::Marked(mark) = self.cells[a.0 * BOARD_SIZE + a.1] {
                if self.cells[b.0 * BOARD_SIZE + b.1] == Cell::Marked(mark)
                    && self.cells[c.0 * BOARD_SIZE + c.1] == Cell::Marked(mark)
                {
                    return Some(mark);
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // compact row-per-segment form, e.g. "XO./.X./..O"
        for row in 0..BOARD_SIZE {
            if row > 0 {
                f.write_str("/")?;
            }
            for col in 0..BOARD_SIZE {
                let ch = match self.cells[row * BOARD_SIZE + col] {
                    Cell::Empty => '.',
                    Cell::Marked(Mark::X) => 'X',
                    Cell::Marked(Mark::O) => 'O',
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
