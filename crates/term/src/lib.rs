//! Terminal layer: framebuffer, renderer, and the deck/game views.
//!
//! The views are pure state -> framebuffer mappings; only
//! [`renderer::TerminalRenderer`] touches the real terminal.

pub mod deck_view;
pub mod fb;
pub mod game_view;
pub mod renderer;
mod wrap;

pub use deck_view::DeckView;
pub use fb::{Cell, FrameBuffer, Style, Viewport};
pub use game_view::GameLayerView;
pub use renderer::TerminalRenderer;
