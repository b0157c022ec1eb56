//! Generic grid-puzzle module (placeholder shell).

use tracing::debug;
use tui_deck_core::{DispatcherHandle, GameError, GameModule, Line, Mount};
use tui_deck_types::TextStyle;

pub struct GridGame {
    dispatcher: DispatcherHandle,
}

impl GridGame {
    pub fn new(dispatcher: DispatcherHandle) -> Self {
        Self { dispatcher }
    }
}

impl GameModule for GridGame {
    fn title(&self) -> &str {
        "Grid Puzzle"
    }

    fn instructions(&self) -> &str {
        "Solve grid-based puzzles including word searches, logic grids, and pattern challenges.\n\
         This feature is coming soon!"
    }

    fn render(&mut self, mount: &Mount, _instance_id: &str) -> Result<(), GameError> {
        mount.replace(vec![
            Line::new(TextStyle::Title, "Grid Puzzle"),
            Line::new(TextStyle::Muted, "Coming soon"),
            Line::blank(),
            Line::new(
                TextStyle::Body,
                "Word searches and logic grids will be available here.",
            ),
        ]);

        self.dispatcher.register(Box::new(|key| {
            debug!(?key, "grid keyboard input");
            Ok(())
        }));
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), GameError> {
        debug!("grid module destroyed");
        Ok(())
    }
}
