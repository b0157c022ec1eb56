//! Sudoku module (placeholder shell, no puzzle logic yet).

use tracing::debug;
use tui_deck_core::{DispatcherHandle, GameError, GameModule, Line, Mount};
use tui_deck_types::TextStyle;

pub struct SudokuGame {
    dispatcher: DispatcherHandle,
}

impl SudokuGame {
    pub fn new(dispatcher: DispatcherHandle) -> Self {
        Self { dispatcher }
    }
}

impl GameModule for SudokuGame {
    fn title(&self) -> &str {
        "Daily Sudoku"
    }

    fn instructions(&self) -> &str {
        "Fill the 9\u{d7}9 grid so that each row, column, and 3\u{d7}3 box contains the digits 1-9.\n\
         This feature is coming soon!"
    }

    fn render(&mut self, mount: &Mount, _instance_id: &str) -> Result<(), GameError> {
        mount.replace(vec![
            Line::new(TextStyle::Title, "Sudoku Puzzle"),
            Line::new(TextStyle::Muted, "Coming soon"),
            Line::blank(),
            Line::new(
                TextStyle::Body,
                "Classic 9\u{d7}9 sudoku puzzles will be available here.",
            ),
        ]);

        self.dispatcher.register(Box::new(|key| {
            // TODO: number entry and arrow navigation once the grid lands.
            if key.digit().is_some() {
                debug!(?key, "sudoku number input");
            }
            Ok(())
        }));
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), GameError> {
        debug!("sudoku module destroyed");
        Ok(())
    }
}
