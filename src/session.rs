//! Session layer: owns the engine and the roster, serializes intents.

use crate::{
    common::MoveError,
    game::{GameEngine, GameState},
    intent::Intent,
    players::Roster,
};

/// Owns the authoritative game plus the player identities and funnels every
/// user intent through one place.
///
/// Frontends cannot race two moves or mutate state behind the engine's back:
/// each dispatch is an independent, immediate computation against the
/// current snapshot, and a stale intent simply comes back rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    engine: GameEngine,
    roster: Roster,
}

impl GameSession {
    /// Fresh session: new game, default player names.
    pub fn new() -> Self {
        GameSession {
            engine: GameEngine::new(),
            roster: Roster::new(),
        }
    }

    /// Copy of the current snapshot, for rendering.
    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    /// Player identities, for labeling.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Route one intent.
    ///
    /// Move rejections are logged and returned to the caller; they never
    /// abort the session. Rename intents go to the roster only and leave the
    /// game snapshot untouched.
    pub fn dispatch(&mut self, intent: Intent) -> Result<GameState, MoveError> {
        match intent {
            Intent::Move { row, col } => {
                let mover = self.engine.state().active_player();
                match self.engine.apply_move(row, col) {
                    Ok(next) => {
                        log::debug!("{} marked ({}, {}) -> {:?}", mover, row, col, next.status());
                        Ok(next)
                    }
                    Err(err) => {
                        log::warn!("rejected move at ({}, {}): {}", row, col, err);
                        Err(err)
                    }
                }
            }
            Intent::NewGame => {
                log::info!("starting a new game");
                Ok(self.engine.reset())
            }
            Intent::Rename { mark, name } => {
                log::debug!("renaming {} to {:?}", mark, name);
                self.roster.set_name(mark, &name);
                Ok(self.engine.state())
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
