//! Deck paging state: current card, wraparound, and answer reveal.

use tui_deck_types::Card;

/// What activating the current card should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardActivation {
    /// Hand off to the mode controller with the card's game type and
    /// instance id.
    LaunchGame {
        game_type: String,
        instance_id: String,
    },
    /// The card's answer was just revealed.
    Reveal,
    /// Nothing to do (no answer, or already revealed).
    None,
}

/// Paging and reveal state over the loaded card sequence.
///
/// Paging wraps in both directions, and the reveal state is per-visit: it
/// resets on every card change, like the carousel it stands in for.
pub struct DeckState {
    cards: Vec<Card>,
    index: usize,
    revealed: bool,
}

impl DeckState {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            index: 0,
            revealed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.index)
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Page forward, wrapping past the last card.
    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.cards.len();
        self.revealed = false;
    }

    /// Page backward, wrapping past the first card.
    pub fn prev(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.index = (self.index + self.cards.len() - 1) % self.cards.len();
        self.revealed = false;
    }

    /// Activate the current card.
    ///
    /// Game cards always yield a launch request. Q&A cards reveal once;
    /// repeat activations on an already-revealed card do nothing.
    pub fn activate(&mut self) -> CardActivation {
        let Some(card) = self.cards.get(self.index) else {
            return CardActivation::None;
        };

        if let Some(game) = &card.game {
            let instance_id = card
                .game_id
                .clone()
                .unwrap_or_else(|| game.clone());
            return CardActivation::LaunchGame {
                game_type: game.clone(),
                instance_id,
            };
        }

        if card.answer.is_some() && !self.revealed {
            self.revealed = true;
            return CardActivation::Reveal;
        }

        CardActivation::None
    }
}
