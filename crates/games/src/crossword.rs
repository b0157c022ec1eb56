//! Crossword module (placeholder shell, no grid logic yet).

use tracing::debug;
use tui_deck_core::{DispatcherHandle, GameError, GameModule, Line, Mount};
use tui_deck_types::TextStyle;

pub struct CrosswordGame {
    dispatcher: DispatcherHandle,
}

impl CrosswordGame {
    pub fn new(dispatcher: DispatcherHandle) -> Self {
        Self { dispatcher }
    }
}

impl GameModule for CrosswordGame {
    fn title(&self) -> &str {
        "Daily Crossword"
    }

    fn instructions(&self) -> &str {
        "Fill in the crossword grid using the clues provided.\n\
         This feature is coming soon!"
    }

    fn render(&mut self, mount: &Mount, _instance_id: &str) -> Result<(), GameError> {
        mount.replace(vec![
            Line::new(TextStyle::Title, "Crossword Puzzle"),
            Line::new(TextStyle::Muted, "Coming soon"),
            Line::blank(),
            Line::new(
                TextStyle::Body,
                "Classic crossword puzzles will be available here.",
            ),
        ]);

        self.dispatcher.register(Box::new(|key| {
            debug!(?key, "crossword keyboard input");
            Ok(())
        }));
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), GameError> {
        debug!("crossword module destroyed");
        Ok(())
    }
}
