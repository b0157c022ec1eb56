//! Game module contract, mount point, and the exit signal.
//!
//! A game module is a self-contained interactive unit. The controller hands
//! it a fresh [`Mount`] on play confirmation; the module populates it and may
//! register key listeners with the dispatcher it was constructed with. The
//! module keeps rewriting the mount as its internal state changes; the
//! terminal layer paints whatever lines are present each frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tui_deck_types::TextStyle;

use crate::error::GameError;

/// One styled line of mount content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: TextStyle,
    pub text: String,
}

impl Line {
    pub fn new(style: TextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// An empty body line, used as vertical spacing.
    pub fn blank() -> Self {
        Self::new(TextStyle::Body, "")
    }
}

/// Shared mount point for game-layer content.
///
/// Cloning yields another handle to the same content. The controller owns
/// the canonical handle and clears it on every mode transition; the active
/// module holds a clone and rewrites the content as it plays.
#[derive(Clone, Default)]
pub struct Mount(Rc<RefCell<Vec<Line>>>);

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Replace the whole content in one step.
    pub fn replace(&self, lines: Vec<Line>) {
        *self.0.borrow_mut() = lines;
    }

    pub fn push(&self, style: TextStyle, text: impl Into<String>) {
        self.0.borrow_mut().push(Line::new(style, text));
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Snapshot of the current content, for painting and for tests.
    pub fn lines(&self) -> Vec<Line> {
        self.0.borrow().clone()
    }
}

impl std::fmt::Debug for Mount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Mount").field(&self.0.borrow().len()).finish()
    }
}

/// Cloneable request flag a module uses to ask for deck mode back.
///
/// This is the module-facing half of the exit callback: a module (or a key
/// listener it registered) calls [`ExitSignal::request`], and the event loop
/// drains the flag and runs the controller's exit procedure. Keeping the
/// actual transition out of listener call stacks means a module can never
/// re-enter the controller mid-dispatch.
#[derive(Clone, Default)]
pub struct ExitSignal(Rc<Cell<bool>>);

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask to leave game mode at the next loop turn.
    pub fn request(&self) {
        self.0.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    /// Consume a pending request, if any.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Capability contract every game module implements.
///
/// `render` must be safe to call again after a prior `destroy` ("play
/// again"); it is not required to be safe to call twice without one.
/// `destroy` releases all module-owned state so a later `render` starts
/// clean; returning `Ok` for "nothing to clean up" is expected.
pub trait GameModule {
    /// Display title for the intro screen. Empty means "use the registry key".
    fn title(&self) -> &str {
        ""
    }

    /// Instruction copy for the intro screen (trusted, author-supplied).
    fn instructions(&self) -> &str {
        ""
    }

    /// Populate a fresh, empty mount and wire any interaction.
    fn render(&mut self, mount: &Mount, instance_id: &str) -> Result<(), GameError>;

    /// Release module-owned state.
    fn destroy(&mut self) -> Result<(), GameError>;
}

/// Shared, single-threaded handle to a registered module.
pub type SharedModule = Rc<RefCell<dyn GameModule>>;
