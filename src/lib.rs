//! Terminal deck viewer (workspace facade crate).
//!
//! This package keeps a stable `tui_deck::{core,games,input,store,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_deck_core as core;
pub use tui_deck_games as games;
pub use tui_deck_input as input;
pub use tui_deck_store as store;
pub use tui_deck_term as term;
pub use tui_deck_types as types;
