//! Live session record: which mode is active, and which game owns it.

use tui_deck_types::{GamePhase, Mode};

use crate::module::SharedModule;

/// The game currently occupying the game layer.
///
/// Bundling the module handle and the caller-supplied instance id into one
/// value makes the "both present or both absent" rule structural.
pub struct ActiveGame {
    pub key: String,
    pub instance_id: String,
    pub module: SharedModule,
    pub phase: GamePhase,
}

/// Session state owned by the mode controller.
///
/// Invariant: `active` is `Some` exactly when `mode == Mode::Game`.
pub struct Session {
    mode: Mode,
    active: Option<ActiveGame>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: Mode::Deck,
            active: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    pub fn game_phase(&self) -> Option<GamePhase> {
        self.active.as_ref().map(|a| a.phase)
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.key.as_str())
    }

    pub fn active_instance_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.instance_id.as_str())
    }

    pub(crate) fn enter(&mut self, active: ActiveGame) {
        self.mode = Mode::Game;
        self.active = Some(active);
    }

    pub(crate) fn leave(&mut self) -> Option<ActiveGame> {
        self.mode = Mode::Deck;
        self.active.take()
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        if let Some(active) = self.active.as_mut() {
            active.phase = phase;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
