//! Typed failures surfaced by game modules.

use thiserror::Error;

/// Failure reported by a game module or one of its key listeners.
///
/// These never escape the mode controller or the key dispatcher; both
/// boundaries log the error and continue (render failures additionally swap
/// the mount content for a placeholder).
#[derive(Debug, Error)]
pub enum GameError {
    /// A module's `render` or `destroy` could not complete.
    #[error("module error: {0}")]
    Module(String),

    /// A key listener could not process an event.
    #[error("listener error: {0}")]
    Listener(String),
}

impl GameError {
    pub fn module(msg: impl Into<String>) -> Self {
        GameError::Module(msg.into())
    }

    pub fn listener(msg: impl Into<String>) -> Self {
        GameError::Listener(msg.into())
    }
}
