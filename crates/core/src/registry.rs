//! Game registry: maps a game-type key to its module.
//!
//! Modules are registered once at startup and never removed. The capability
//! contract (`render`/`destroy`) is carried by the [`GameModule`] trait, so
//! anything that reaches the registry is safely callable; the controller
//! needs no defensive checks downstream.

use tracing::debug;

use crate::module::{GameModule, SharedModule};

/// A registered game module with its display metadata.
///
/// Title and instructions are copied out of the module at registration time
/// and are immutable thereafter.
pub struct GameEntry {
    key: String,
    title: String,
    instructions: String,
    module: SharedModule,
}

impl GameEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Another handle to the registered module.
    pub fn module(&self) -> SharedModule {
        std::rc::Rc::clone(&self.module)
    }
}

/// Registry of pluggable game modules, in registration order.
#[derive(Default)]
pub struct GameRegistry {
    entries: Vec<GameEntry>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under `key`.
    ///
    /// A duplicate key silently overwrites the previous module (last
    /// registration wins) while the key keeps its original `list` position.
    pub fn register(&mut self, key: impl Into<String>, module: SharedModule) {
        let key = key.into();
        let (title, instructions) = {
            let m = module.borrow();
            (m.title().to_string(), m.instructions().to_string())
        };
        let entry = GameEntry {
            key: key.clone(),
            title,
            instructions,
            module,
        };

        if let Some(slot) = self.entries.iter_mut().find(|e| e.key == key) {
            debug!(key = %key, "replacing registered game module");
            *slot = entry;
        } else {
            debug!(key = %key, "game registered");
            self.entries.push(entry);
        }
    }

    /// Look up a registered module. Missing keys are not an error.
    pub fn get(&self, key: &str) -> Option<&GameEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All registered keys, in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
