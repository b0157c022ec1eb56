//! Content and state persistence.
//!
//! Two concerns live here: loading the deck document at startup
//! ([`deck::load_deck`]) and the offline key-value state store
//! ([`state::StateStore`]), which exists as a gated extension point and is
//! disabled in the default configuration.

pub mod deck;
pub mod state;

pub use deck::load_deck;
pub use state::StateStore;
