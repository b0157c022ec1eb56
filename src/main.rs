//! Terminal deck viewer runner (default binary).
//!
//! One blocking event loop: paint the frame for the current mode, read the
//! next terminal event, route it. Deck-mode keys page and activate cards;
//! game-mode keys feed the intro/back chrome or the key dispatcher.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_deck::core::{
    CardActivation, DeckState, DispatcherHandle, ExitSignal, GameRegistry, ModeController, Session,
};
use tui_deck::games::register_builtin;
use tui_deck::input::{convert_key, deck_action, is_interrupt, should_quit};
use tui_deck::term::{DeckView, FrameBuffer, GameLayerView, TerminalRenderer, Viewport};
use tui_deck::types::{Card, DeckAction, GamePhase, Mode};

const DEFAULT_DECK_PATH: &str = "deck.json";
const LOG_PATH: &str = "tui-deck.log";

fn main() -> Result<()> {
    init_logging();

    let deck_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DECK_PATH));
    // Load before raw mode so a bad document reports as a plain error.
    let cards = tui_deck::store::load_deck(&deck_path)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, cards);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logging goes to a side file: stdout is a raw-mode alternate screen.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let Ok(file) = OpenOptions::new().create(true).append(true).open(LOG_PATH) else {
        return;
    };
    let file = Arc::new(file);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(move || Arc::clone(&file))
        .try_init();
}

fn run(term: &mut TerminalRenderer, cards: Vec<Card>) -> Result<()> {
    let mut deck = DeckState::new(cards);

    let dispatcher = DispatcherHandle::new();
    let exit = ExitSignal::new();
    let mut registry = GameRegistry::new();
    register_builtin(&mut registry, &dispatcher, &exit);
    let mut controller = ModeController::new(Session::new(), registry, dispatcher.clone(), exit);

    let deck_view = DeckView::default();
    let game_view = GameLayerView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match controller.mode() {
            Mode::Deck => deck_view.render_into(&deck, viewport, &mut fb),
            Mode::Game => {
                let lines = controller.game_layer().lines();
                let phase = controller.game_phase().unwrap_or(GamePhase::Intro);
                game_view.render_into(phase, &lines, viewport, &mut fb);
            }
        }
        term.draw(&fb)?;

        // Resize events fall through and repaint on the next turn.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_interrupt(key) {
            return Ok(());
        }

        match controller.mode() {
            Mode::Deck => {
                if should_quit(key) {
                    return Ok(());
                }
                match deck_action(key) {
                    Some(DeckAction::Prev) => deck.prev(),
                    Some(DeckAction::Next) => deck.next(),
                    Some(DeckAction::Activate) => {
                        if let CardActivation::LaunchGame {
                            game_type,
                            instance_id,
                        } = deck.activate()
                        {
                            controller.enter_game_mode(&game_type, &instance_id);
                        }
                    }
                    None => {}
                }
            }
            Mode::Game => {
                match controller.game_phase() {
                    Some(GamePhase::Intro) => match key.code {
                        KeyCode::Enter => {
                            controller.confirm_play();
                        }
                        KeyCode::Esc => {
                            controller.confirm_back();
                        }
                        _ => {}
                    },
                    Some(GamePhase::Active) => {
                        if key.code == KeyCode::Esc {
                            controller.exit_game_mode();
                        } else if let Some(k) = convert_key(key) {
                            dispatcher.dispatch(&k);
                        }
                    }
                    None => {}
                }
                if controller.take_exit_request() {
                    controller.exit_game_mode();
                }
            }
        }
    }
}
