//! Player identity, kept apart from the game rules.
//!
//! Display names are presentation data: a rename goes through the roster and
//! never touches the engine or its snapshots.

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
};

use crate::board::Mark;

/// Identity of one player slot: which mark it plays and how to label it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSlot {
    mark: Mark,
    name: String,
}

impl PlayerSlot {
    /// Create a slot playing `mark` under the given display name.
    pub fn new(mark: Mark, name: &str) -> Self {
        PlayerSlot {
            mark,
            name: name.to_string(),
        }
    }

    /// Mark this slot plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Current display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The two player slots. Each slot is an independently owned record; editing
/// one never aliases or disturbs the other, and never involves game state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    x: PlayerSlot,
    o: PlayerSlot,
}

impl Roster {
    /// Roster with the default labels used until someone edits them.
    pub fn new() -> Self {
        Roster {
            x: PlayerSlot::new(Mark::X, "Player 1"),
            o: PlayerSlot::new(Mark::O, "Player 2"),
        }
    }

    /// Slot playing the given mark.
    pub fn slot(&self, mark: Mark) -> &PlayerSlot {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Replace the display name for one slot.
    pub fn set_name(&mut self, mark: Mark, name: &str) {
        match mark {
            Mark::X => self.x.name = name.to_string(),
            Mark::O => self.o.name = name.to_string(),
        }
    }

    /// Label for a mark, e.g. `Alice (X)`.
    pub fn label(&self, mark: Mark) -> String {
        let slot = self.slot(mark);
        format!("{} ({})", slot.name(), slot.mark())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
