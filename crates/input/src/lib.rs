//! Terminal input mapping.
//!
//! This module is the only place that sees `crossterm` key events on the
//! input side. It converts them into [`tui_deck_types::Key`] values for the
//! core's dispatcher and into deck navigation actions for the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_deck_types::{DeckAction, Key};

/// Map a terminal key event into the core's key type.
///
/// Keys with no core meaning (function keys, media keys, ...) map to `None`
/// and are dropped before they reach the dispatcher.
pub fn convert_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        _ => None,
    }
}

/// Map keyboard input to deck navigation actions.
pub fn deck_action(key: KeyEvent) -> Option<DeckAction> {
    match key.code {
        // Paging
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(DeckAction::Prev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(DeckAction::Next),

        // Activate the current card
        KeyCode::Enter | KeyCode::Char(' ') => Some(DeckAction::Activate),

        _ => None,
    }
}

/// Check if key should quit the application (deck mode only).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_interrupt(key)
}

/// Ctrl-C quits from any mode.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
