//! Game modules pluggable into the deck's game layer.
//!
//! Each module owns its internal state and mount content and talks to the
//! rest of the application only through the pieces it is constructed with:
//! a dispatcher handle for key listeners and (where the game can end itself)
//! the exit signal. Trivia is fully playable; sudoku, crossword, and grid
//! are placeholder shells awaiting their puzzle logic.

pub mod crossword;
pub mod grid;
pub mod sudoku;
pub mod trivia;

pub use crossword::CrosswordGame;
pub use grid::GridGame;
pub use sudoku::SudokuGame;
pub use trivia::TriviaGame;

use std::cell::RefCell;
use std::rc::Rc;

use tui_deck_core::{DispatcherHandle, ExitSignal, GameRegistry};

/// Register every built-in game module, once, at startup.
pub fn register_builtin(
    registry: &mut GameRegistry,
    dispatcher: &DispatcherHandle,
    exit: &ExitSignal,
) {
    registry.register(
        "trivia",
        Rc::new(RefCell::new(TriviaGame::new(
            dispatcher.clone(),
            exit.clone(),
        ))),
    );
    registry.register(
        "sudoku",
        Rc::new(RefCell::new(SudokuGame::new(dispatcher.clone()))),
    );
    registry.register(
        "crossword",
        Rc::new(RefCell::new(CrosswordGame::new(dispatcher.clone()))),
    );
    registry.register(
        "grid",
        Rc::new(RefCell::new(GridGame::new(dispatcher.clone()))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registration_order() {
        let mut registry = GameRegistry::new();
        register_builtin(&mut registry, &DispatcherHandle::new(), &ExitSignal::new());

        assert_eq!(registry.list(), vec!["trivia", "sudoku", "crossword", "grid"]);
        assert!(registry.has("trivia"));
        assert_eq!(registry.get("sudoku").unwrap().title(), "Daily Sudoku");
    }
}
