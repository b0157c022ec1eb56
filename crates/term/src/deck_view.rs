//! DeckView: maps deck paging state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested against the
//! framebuffer's text content.

use crossterm::style::Color;

use tui_deck_core::DeckState;

use crate::fb::{FrameBuffer, Style, Viewport};
use crate::wrap::wrap_text;

const KICKER: Style = Style::fg(Color::Rgb {
    r: 130,
    g: 180,
    b: 210,
});
const TITLE: Style = Style::fg(Color::Rgb {
    r: 235,
    g: 235,
    b: 235,
})
.bold();
const BODY: Style = Style::fg(Color::Rgb {
    r: 200,
    g: 200,
    b: 200,
});
const HINT: Style = Style::fg(Color::Rgb {
    r: 140,
    g: 140,
    b: 140,
})
.dim();
const ANSWER: Style = Style::fg(Color::Rgb {
    r: 120,
    g: 210,
    b: 140,
})
.bold();
const EXPLAIN: Style = Style::fg(Color::Rgb {
    r: 180,
    g: 180,
    b: 180,
});
const MUTED: Style = Style::fg(Color::Rgb {
    r: 120,
    g: 120,
    b: 130,
})
.dim();

/// Stop drawing individual pagination dots past this card count.
const MAX_DOTS: usize = 16;

/// Renders the current card plus a pagination footer.
pub struct DeckView {
    /// Maximum text column width in terminal cells.
    max_width: u16,
}

impl Default for DeckView {
    fn default() -> Self {
        Self { max_width: 64 }
    }
}

impl DeckView {
    pub fn new(max_width: u16) -> Self {
        Self { max_width }
    }

    pub fn render_into(&self, deck: &DeckState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let Some(card) = deck.current() else {
            fb.put_centered(viewport.height / 2, "This deck has no cards.", HINT);
            return;
        };

        let width = (self.max_width.min(viewport.width.saturating_sub(4)).max(10)) as usize;
        let mut rows: Vec<(String, Style)> = Vec::new();

        if let Some(kicker) = &card.kicker {
            rows.push((kicker.to_uppercase(), KICKER));
            rows.push((String::new(), BODY));
        }
        if let Some(title) = &card.title {
            for line in wrap_text(title, width) {
                rows.push((line, TITLE));
            }
            rows.push((String::new(), BODY));
        }
        if let Some(image) = &card.image {
            rows.push((format!("[image: {image}]"), MUTED));
            rows.push((String::new(), BODY));
        }
        if let Some(body) = &card.body {
            for line in wrap_text(body, width) {
                rows.push((line, BODY));
            }
        }

        if deck.revealed() {
            if let Some(answer) = &card.answer {
                rows.push((String::new(), BODY));
                for line in wrap_text(answer, width) {
                    rows.push((line, ANSWER));
                }
                if let Some(explain) = &card.explain {
                    for line in wrap_text(explain, width) {
                        rows.push((line, EXPLAIN));
                    }
                }
            }
        } else if let Some(hint) = activation_hint(card.is_game(), card.answer.is_some()) {
            rows.push((String::new(), BODY));
            rows.push((hint.to_string(), HINT));
        }

        // Keep the footer rows free.
        let avail = viewport.height.saturating_sub(3);
        let top = avail.saturating_sub(rows.len() as u16) / 2;
        for (i, (text, style)) in rows.iter().enumerate() {
            let y = top + i as u16;
            if y >= avail {
                break;
            }
            fb.put_centered(y, text, *style);
        }

        self.draw_footer(deck, viewport, fb);
    }

    fn draw_footer(&self, deck: &DeckState, viewport: Viewport, fb: &mut FrameBuffer) {
        if deck.len() <= MAX_DOTS {
            let mut dots = String::new();
            for i in 0..deck.len() {
                if i > 0 {
                    dots.push(' ');
                }
                dots.push(if i == deck.index() {
                    '\u{25cf}'
                } else {
                    '\u{25cb}'
                });
            }
            fb.put_centered(viewport.height.saturating_sub(2), &dots, MUTED);
        }
        fb.put_centered(
            viewport.height.saturating_sub(1),
            &format!("{} / {}", deck.index() + 1, deck.len()),
            MUTED,
        );
    }
}

fn activation_hint(is_game: bool, has_answer: bool) -> Option<&'static str> {
    if is_game {
        Some("press enter to play this puzzle")
    } else if has_answer {
        Some("press enter to reveal the answer")
    } else {
        None
    }
}
