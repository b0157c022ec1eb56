//! GameLayerView: paints the game layer from the controller's mount.
//!
//! Pure (no I/O). The controller and the active module decide *what* the
//! lines say; this view only decides where they sit and which colors their
//! semantic styles map to. In the active phase a back hint is pinned to the
//! top-left as chrome.

use crossterm::style::Color;

use tui_deck_core::Line;
use tui_deck_types::{GamePhase, TextStyle};

use crate::fb::{FrameBuffer, Style, Viewport};
use crate::wrap::wrap_text;

const BACK_HINT: &str = "esc  back to deck";

/// Renders game-layer content centered in the viewport.
pub struct GameLayerView {
    max_width: u16,
}

impl Default for GameLayerView {
    fn default() -> Self {
        Self { max_width: 64 }
    }
}

impl GameLayerView {
    pub fn new(max_width: u16) -> Self {
        Self { max_width }
    }

    pub fn render_into(
        &self,
        phase: GamePhase,
        lines: &[Line],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        if phase == GamePhase::Active {
            fb.put_str(1, 0, BACK_HINT, style_for(TextStyle::Hint));
        }

        let width = (self.max_width.min(viewport.width.saturating_sub(4)).max(10)) as usize;
        let mut rows: Vec<(String, Style)> = Vec::new();
        for line in lines {
            let style = style_for(line.style);
            if line.text.is_empty() {
                rows.push((String::new(), style));
                continue;
            }
            for wrapped in wrap_text(&line.text, width) {
                rows.push((wrapped, style));
            }
        }

        // Content is centered; row 0 stays chrome-only unless the screen is
        // packed.
        let top = viewport
            .height
            .saturating_sub(rows.len() as u16)
            .saturating_add(1)
            / 2;
        for (i, (text, style)) in rows.iter().enumerate() {
            let y = top + i as u16;
            if y >= viewport.height {
                break;
            }
            fb.put_centered(y, text, *style);
        }
    }
}

fn style_for(style: TextStyle) -> Style {
    match style {
        TextStyle::Title => Style::fg(Color::Rgb {
            r: 235,
            g: 235,
            b: 235,
        })
        .bold(),
        TextStyle::Kicker => Style::fg(Color::Rgb {
            r: 130,
            g: 180,
            b: 210,
        }),
        TextStyle::Body => Style::fg(Color::Rgb {
            r: 200,
            g: 200,
            b: 200,
        }),
        TextStyle::Hint => Style::fg(Color::Rgb {
            r: 140,
            g: 140,
            b: 140,
        })
        .dim(),
        TextStyle::Choice => Style::fg(Color::Rgb {
            r: 220,
            g: 220,
            b: 220,
        }),
        TextStyle::Correct => Style::fg(Color::Rgb {
            r: 120,
            g: 210,
            b: 140,
        })
        .bold(),
        TextStyle::Incorrect => Style::fg(Color::Rgb {
            r: 230,
            g: 120,
            b: 120,
        })
        .bold(),
        TextStyle::Score => Style::fg(Color::Rgb {
            r: 235,
            g: 220,
            b: 160,
        })
        .bold(),
        TextStyle::Muted => Style::fg(Color::Rgb {
            r: 120,
            g: 120,
            b: 130,
        })
        .dim(),
    }
}
