//! Deck content loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tui_deck_types::Card;

/// Load the deck document: a JSON array of cards.
///
/// Failures here are startup errors; there is no deck to show without the
/// document, so the caller reports and exits rather than limping on.
pub fn load_deck(path: &Path) -> Result<Vec<Card>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read deck file {}", path.display()))?;
    let cards: Vec<Card> =
        serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cards)
}
