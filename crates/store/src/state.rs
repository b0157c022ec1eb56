//! Offline state store (inert by default).
//!
//! A key-value store over one JSON file: per-game entries keyed
//! `gamestate_<id>` plus a single `app_preferences` entry. The store ships
//! disabled — every operation is a gated no-op until a build opts in — and
//! when enabled it still never fails the caller: I/O and serde problems are
//! logged and swallowed.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

/// Key prefix for per-game state entries.
const GAME_STATE_PREFIX: &str = "gamestate_";

/// Key of the single application preferences entry.
const PREFERENCES_KEY: &str = "app_preferences";

/// File-backed key-value store for game state and preferences.
pub struct StateStore {
    enabled: bool,
    path: PathBuf,
}

impl StateStore {
    /// Create a store over `path`, disabled.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            enabled: false,
            path: path.into(),
        }
    }

    /// Opt in to actually reading and writing the backing file.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Save one game instance's state blob.
    pub fn save_game_state<T: Serialize>(&self, game_id: &str, state: &T) {
        if !self.enabled {
            return;
        }
        let Some(value) = to_value(state) else {
            return;
        };
        let mut map = self.read_map();
        map.insert(format!("{GAME_STATE_PREFIX}{game_id}"), value);
        self.write_map(&map);
        debug!(game_id, "game state saved");
    }

    /// Load one game instance's state blob, if present.
    pub fn load_game_state<T: DeserializeOwned>(&self, game_id: &str) -> Option<T> {
        if !self.enabled {
            return None;
        }
        let map = self.read_map();
        let value = map.get(&format!("{GAME_STATE_PREFIX}{game_id}"))?;
        from_value(value.clone())
    }

    /// Drop one game instance's saved state.
    pub fn clear_game_state(&self, game_id: &str) {
        if !self.enabled {
            return;
        }
        let mut map = self.read_map();
        if map.remove(&format!("{GAME_STATE_PREFIX}{game_id}")).is_some() {
            self.write_map(&map);
            debug!(game_id, "game state cleared");
        }
    }

    /// Save the global preferences entry.
    pub fn save_preferences<T: Serialize>(&self, prefs: &T) {
        if !self.enabled {
            return;
        }
        let Some(value) = to_value(prefs) else {
            return;
        };
        let mut map = self.read_map();
        map.insert(PREFERENCES_KEY.to_string(), value);
        self.write_map(&map);
    }

    /// Load the global preferences entry, if present.
    pub fn load_preferences<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.enabled {
            return None;
        }
        let map = self.read_map();
        from_value(map.get(PREFERENCES_KEY)?.clone())
    }

    fn read_map(&self) -> BTreeMap<String, Value> {
        match fs::read_to_string(&self.path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(map) => map,
                Err(err) => {
                    error!(error = %err, path = %self.path.display(), "state file unreadable");
                    BTreeMap::new()
                }
            },
            // A missing file is the normal first-run case.
            Err(_) => BTreeMap::new(),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, Value>) {
        let data = match serde_json::to_string_pretty(map) {
            Ok(data) => data,
            Err(err) => {
                error!(error = %err, "state serialization failed");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, data) {
            error!(error = %err, path = %self.path.display(), "state write failed");
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(value) => Some(value),
        Err(err) => {
            error!(error = %err, "state encoding failed");
            None
        }
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(value) => Some(value),
        Err(err) => {
            error!(error = %err, "state decoding failed");
            None
        }
    }
}
