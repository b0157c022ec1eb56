//! Shared types module - data structures used across the application
//!
//! This module defines the fundamental types shared by the core state
//! machine, the game modules, the input layer, and the terminal views.
//! Everything here is plain data; the only external concern is the serde
//! derive on the deck content model.
//!
//! # Display modes
//!
//! The application is always in exactly one of two top-level modes:
//!
//! - **Deck**: paging through content cards
//! - **Game**: a game module owns the screen
//!
//! While in game mode, a sub-phase distinguishes the transient intro screen
//! from the running game:
//!
//! | Phase | Meaning |
//! |-------|---------|
//! | `Intro` | Title + instructions with a Play/Back choice |
//! | `Active` | The module has rendered and keyboard routing is live |
//!
//! # Feedback buckets
//!
//! The trivia results screen buckets the final percentage:
//!
//! | Threshold | Bucket |
//! |-----------|--------|
//! | 100 | perfect |
//! | >= 70 | great |
//! | >= 50 | ok |
//! | below | try again |

use serde::{Deserialize, Serialize};

/// Perfect-score feedback threshold (percent).
pub const FEEDBACK_PERFECT: u32 = 100;

/// "Great" feedback bucket lower bound (percent).
pub const FEEDBACK_GREAT_MIN: u32 = 70;

/// "Not bad" feedback bucket lower bound (percent).
pub const FEEDBACK_OK_MIN: u32 = 50;

/// Top-level display mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Deck,
    Game,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Deck => "deck",
            Mode::Game => "game",
        }
    }
}

/// Sub-state of game mode.
///
/// `Intro` exists only transiently between entering game mode and the user's
/// confirmation to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Intro,
    Active,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Intro => "intro",
            GamePhase::Active => "active",
        }
    }
}

/// A key-press event as seen by the core.
///
/// The input layer maps terminal events into this type so that the core and
/// the game modules stay independent of any terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    Tab,
}

impl Key {
    /// Decimal digit value for `Char('0')..=Char('9')`, `None` otherwise.
    pub fn digit(&self) -> Option<u32> {
        match self {
            Key::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}

/// Navigation intents while in deck mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckAction {
    /// Page to the previous card.
    Prev,
    /// Page to the next card.
    Next,
    /// Activate the current card (reveal answer / launch game).
    Activate,
}

/// Semantic style of one line of game-layer or card content.
///
/// Views translate these into concrete terminal colors; the core and the
/// game modules never deal in colors directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Title,
    Kicker,
    Body,
    Hint,
    /// An unanswered multiple-choice option.
    Choice,
    /// A choice (or feedback line) confirmed correct.
    Correct,
    /// A choice (or feedback line) confirmed incorrect.
    Incorrect,
    Score,
    Muted,
}

/// One content card of the deck document.
///
/// All fields are optional; the document format is shared with the authoring
/// side and cards carry only what their layout needs. Game cards set `game`
/// (and usually `game_id`); Q&A cards set `answer`/`explain`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub kicker: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub answer: Option<String>,
    pub explain: Option<String>,
    pub game: Option<String>,
    #[serde(rename = "gameId")]
    pub game_id: Option<String>,
    pub layout: Option<String>,
}

impl Card {
    /// Whether activating this card should launch a game module.
    pub fn is_game(&self) -> bool {
        self.game.is_some()
    }

    /// The game instance identifier, defaulting to the game type.
    pub fn game_instance_id(&self) -> Option<&str> {
        self.game_id.as_deref().or(self.game.as_deref())
    }
}
