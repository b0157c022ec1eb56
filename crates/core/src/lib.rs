//! Core application logic - pure, single-threaded, and testable
//!
//! This module contains the mode-switching state machine, the game module
//! registry, the keyboard dispatcher, and the deck paging state. It has
//! **zero dependencies** on the terminal, the filesystem, or any rendering
//! backend, making it:
//!
//! - **Testable**: every transition and error path has unit coverage
//! - **Portable**: the same core drives the terminal frontend or a headless
//!   harness
//! - **Predictable**: all work runs on reaction to discrete events on one
//!   thread; state-machine preconditions stand in for locking
//!
//! # Module Structure
//!
//! - [`controller`]: deck <-> game mode state machine with fail-soft module
//!   boundaries
//! - [`registry`]: key -> game module mapping, registered once at startup
//! - [`dispatcher`]: ordered key-event fan-out with per-listener error
//!   isolation
//! - [`module`]: the game module capability contract, the shared mount
//!   point, and the exit signal
//! - [`session`]: the live mode/active-game record
//! - [`deck`]: card paging and answer-reveal state
//! - [`error`]: typed module failures
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use tui_deck_core::{
//!     DispatcherHandle, ExitSignal, GameError, GameModule, GameRegistry, ModeController, Mount,
//!     Session,
//! };
//! use tui_deck_types::{Mode, TextStyle};
//!
//! struct Hello;
//!
//! impl GameModule for Hello {
//!     fn title(&self) -> &str {
//!         "Hello"
//!     }
//!
//!     fn render(&mut self, mount: &Mount, _instance_id: &str) -> Result<(), GameError> {
//!         mount.push(TextStyle::Body, "hi");
//!         Ok(())
//!     }
//!
//!     fn destroy(&mut self) -> Result<(), GameError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = GameRegistry::new();
//! registry.register("hello", Rc::new(RefCell::new(Hello)));
//!
//! let mut controller = ModeController::new(
//!     Session::new(),
//!     registry,
//!     DispatcherHandle::new(),
//!     ExitSignal::new(),
//! );
//!
//! assert!(controller.enter_game_mode("hello", "h1"));
//! assert!(controller.confirm_play());
//! assert!(controller.exit_game_mode());
//! assert_eq!(controller.mode(), Mode::Deck);
//! ```

pub mod controller;
pub mod deck;
pub mod dispatcher;
pub mod error;
pub mod module;
pub mod registry;
pub mod session;

pub use tui_deck_types as types;

// Re-export commonly used types for convenience
pub use controller::ModeController;
pub use deck::{CardActivation, DeckState};
pub use dispatcher::{DispatcherHandle, KeyDispatcher, KeyListener};
pub use error::GameError;
pub use module::{ExitSignal, GameModule, Line, Mount, SharedModule};
pub use registry::{GameEntry, GameRegistry};
pub use session::{ActiveGame, Session};
