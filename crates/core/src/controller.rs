//! Mode controller: the state machine governing deck-vs-game display.
//!
//! Transitions are serialized by the single-threaded event loop, so the
//! preconditions here substitute for any locking. The two usage errors
//! (wrong mode for an operation, unknown game type) are logged no-ops; a
//! module's `render`/`destroy` failure is contained at this boundary and
//! never reaches the caller.

use tracing::{error, warn};
use tui_deck_types::{GamePhase, Mode, TextStyle};

use crate::dispatcher::DispatcherHandle;
use crate::module::{ExitSignal, Line, Mount};
use crate::registry::GameRegistry;
use crate::session::{ActiveGame, Session};

/// Key hints shown on the intro screen.
const INTRO_HINT: &str = "enter  play   \u{b7}   esc  back";

/// Instruction fallback when a module supplies none.
const NO_INSTRUCTIONS: &str = "No instructions available.";

/// State machine for the deck <-> game mode switch.
///
/// Owns the [`Session`] and the game-layer [`Mount`]; shares the registry
/// (read-only after startup) and the key dispatcher with the rest of the
/// application.
pub struct ModeController {
    session: Session,
    registry: GameRegistry,
    dispatcher: DispatcherHandle,
    exit: ExitSignal,
    game_layer: Mount,
}

impl ModeController {
    pub fn new(
        session: Session,
        registry: GameRegistry,
        dispatcher: DispatcherHandle,
        exit: ExitSignal,
    ) -> Self {
        Self {
            session,
            registry,
            dispatcher,
            exit,
            game_layer: Mount::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn game_phase(&self) -> Option<GamePhase> {
        self.session.game_phase()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    pub fn dispatcher(&self) -> &DispatcherHandle {
        &self.dispatcher
    }

    /// The mount the game layer paints from.
    pub fn game_layer(&self) -> &Mount {
        &self.game_layer
    }

    /// Consume a pending module exit request.
    ///
    /// The event loop calls this after each dispatch and runs
    /// [`ModeController::exit_game_mode`] when it returns true.
    pub fn take_exit_request(&mut self) -> bool {
        self.exit.take()
    }

    /// Switch to game mode, landing on the intro screen.
    ///
    /// Rejected (logged, no state change) when already in game mode or when
    /// `game_type` is not registered. Keyboard routing stays off until the
    /// user confirms play.
    pub fn enter_game_mode(&mut self, game_type: &str, instance_id: &str) -> bool {
        if self.session.mode() == Mode::Game {
            warn!(game_type, "already in game mode");
            return false;
        }

        let Some(entry) = self.registry.get(game_type) else {
            warn!(game_type, "game type not found in registry");
            return false;
        };

        let module = entry.module();
        let title = if entry.title().is_empty() {
            game_type.to_string()
        } else {
            entry.title().to_string()
        };
        let instructions = if entry.instructions().is_empty() {
            NO_INSTRUCTIONS.to_string()
        } else {
            entry.instructions().to_string()
        };

        self.session.enter(ActiveGame {
            key: game_type.to_string(),
            instance_id: instance_id.to_string(),
            module,
            phase: GamePhase::Intro,
        });
        self.paint_intro(&title, &instructions);
        true
    }

    /// Intro -> active: render the module into a fresh mount.
    ///
    /// Fail-soft: a render error keeps the transition (mode stays game, the
    /// keyboard comes up) and swaps the mount content for a failure
    /// placeholder, so a broken module neither strands the user in a dead
    /// screen nor crashes the controller.
    pub fn confirm_play(&mut self) -> bool {
        if self.session.game_phase() != Some(GamePhase::Intro) {
            warn!("confirm_play outside intro screen");
            return false;
        }

        self.game_layer.clear();

        let (module, instance_id) = {
            let active = self.session.active().expect("game mode has an active game");
            (active.module.clone(), active.instance_id.clone())
        };

        let result = module.borrow_mut().render(&self.game_layer, &instance_id);
        self.dispatcher.enable();

        if let Err(err) = result {
            error!(error = %err, "game render failed");
            self.paint_render_failure();
        }

        self.session.set_phase(GamePhase::Active);
        true
    }

    /// Intro -> deck without ever rendering the game.
    pub fn confirm_back(&mut self) -> bool {
        if self.session.game_phase() != Some(GamePhase::Intro) {
            warn!("confirm_back outside intro screen");
            return false;
        }
        self.exit_game_mode()
    }

    /// Tear down the active game and restore deck mode.
    ///
    /// Destroy runs first so a module's teardown can still take a final
    /// synchronous action; its errors are contained. The dispatcher is then
    /// disabled and cleared, the game layer emptied, and the session reset.
    pub fn exit_game_mode(&mut self) -> bool {
        if self.session.mode() != Mode::Game {
            warn!("not in game mode");
            return false;
        }

        if let Some(active) = self.session.active() {
            if let Err(err) = active.module.borrow_mut().destroy() {
                error!(error = %err, game = %active.key, "game destroy failed");
            }
        }

        self.dispatcher.disable();
        self.dispatcher.clear();
        self.game_layer.clear();
        let _ = self.session.leave();

        // A request raised during teardown refers to the game that just
        // ended; drop it.
        self.exit.take();
        true
    }

    fn paint_intro(&self, title: &str, instructions: &str) {
        let mut lines = vec![Line::new(TextStyle::Title, title), Line::blank()];
        for paragraph in instructions.lines() {
            lines.push(Line::new(TextStyle::Body, paragraph));
        }
        lines.push(Line::blank());
        lines.push(Line::new(TextStyle::Hint, INTRO_HINT));
        self.game_layer.replace(lines);
    }

    fn paint_render_failure(&self) {
        self.game_layer.replace(vec![
            Line::new(TextStyle::Incorrect, "Failed to load game"),
            Line::blank(),
            Line::new(TextStyle::Hint, "esc  back to deck"),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::module::{GameModule, SharedModule};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Probe {
        rendered_with: Vec<String>,
        destroyed: u32,
        fail_render: bool,
        fail_destroy: bool,
    }

    struct ProbeModule(Rc<RefCell<Probe>>);

    impl GameModule for ProbeModule {
        fn title(&self) -> &str {
            "Probe"
        }

        fn instructions(&self) -> &str {
            "Line one.\nLine two."
        }

        fn render(&mut self, mount: &Mount, instance_id: &str) -> Result<(), GameError> {
            let mut probe = self.0.borrow_mut();
            probe.rendered_with.push(instance_id.to_string());
            if probe.fail_render {
                return Err(GameError::module("probe render failure"));
            }
            mount.push(TextStyle::Body, "probe content");
            Ok(())
        }

        fn destroy(&mut self) -> Result<(), GameError> {
            let mut probe = self.0.borrow_mut();
            probe.destroyed += 1;
            if probe.fail_destroy {
                return Err(GameError::module("probe destroy failure"));
            }
            Ok(())
        }
    }

    fn controller_with_probe() -> (ModeController, Rc<RefCell<Probe>>) {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let module: SharedModule = Rc::new(RefCell::new(ProbeModule(Rc::clone(&probe))));
        let mut registry = GameRegistry::new();
        registry.register("probe", module);
        let controller = ModeController::new(
            Session::new(),
            registry,
            DispatcherHandle::new(),
            ExitSignal::new(),
        );
        (controller, probe)
    }

    #[test]
    fn enter_shows_intro_without_keyboard() {
        let (mut controller, probe) = controller_with_probe();

        assert!(controller.enter_game_mode("probe", "p1"));
        assert_eq!(controller.mode(), Mode::Game);
        assert_eq!(controller.game_phase(), Some(GamePhase::Intro));
        assert!(!controller.dispatcher().is_enabled());
        // Intro shows metadata, not game content.
        assert!(probe.borrow().rendered_with.is_empty());

        let texts: Vec<String> = controller
            .game_layer()
            .lines()
            .into_iter()
            .map(|l| l.text)
            .collect();
        assert!(texts.contains(&"Probe".to_string()));
        assert!(texts.contains(&"Line two.".to_string()));
    }

    #[test]
    fn enter_rejected_when_already_in_game_mode() {
        let (mut controller, _probe) = controller_with_probe();
        assert!(controller.enter_game_mode("probe", "p1"));

        assert!(!controller.enter_game_mode("probe", "p2"));
        assert_eq!(controller.session().active_instance_id(), Some("p1"));
    }

    #[test]
    fn enter_unknown_game_type_is_a_noop() {
        let (mut controller, _probe) = controller_with_probe();
        assert!(!controller.enter_game_mode("nope", "x"));
        assert_eq!(controller.mode(), Mode::Deck);
        assert!(controller.session().active().is_none());
    }

    #[test]
    fn confirm_play_renders_with_the_instance_id() {
        let (mut controller, probe) = controller_with_probe();
        controller.enter_game_mode("probe", "p1");

        assert!(controller.confirm_play());
        assert_eq!(controller.game_phase(), Some(GamePhase::Active));
        assert!(controller.dispatcher().is_enabled());
        assert_eq!(probe.borrow().rendered_with, vec!["p1".to_string()]);
    }

    #[test]
    fn confirm_play_outside_intro_is_rejected() {
        let (mut controller, probe) = controller_with_probe();
        assert!(!controller.confirm_play());

        controller.enter_game_mode("probe", "p1");
        controller.confirm_play();
        // Second confirmation while already active is a usage error.
        assert!(!controller.confirm_play());
        assert_eq!(probe.borrow().rendered_with.len(), 1);
    }

    #[test]
    fn render_failure_is_fail_soft() {
        let (mut controller, probe) = controller_with_probe();
        probe.borrow_mut().fail_render = true;

        controller.enter_game_mode("probe", "p1");
        assert!(controller.confirm_play());

        // The transition completed anyway.
        assert_eq!(controller.mode(), Mode::Game);
        assert_eq!(controller.game_phase(), Some(GamePhase::Active));
        assert!(controller.dispatcher().is_enabled());

        let texts: Vec<String> = controller
            .game_layer()
            .lines()
            .into_iter()
            .map(|l| l.text)
            .collect();
        assert!(texts.contains(&"Failed to load game".to_string()));

        // And exit still completes fully.
        assert!(controller.exit_game_mode());
        assert_eq!(controller.mode(), Mode::Deck);
        assert_eq!(controller.dispatcher().listener_count(), 0);
    }

    #[test]
    fn confirm_back_exits_without_rendering() {
        let (mut controller, probe) = controller_with_probe();
        controller.enter_game_mode("probe", "p1");

        assert!(controller.confirm_back());
        assert_eq!(controller.mode(), Mode::Deck);
        assert!(probe.borrow().rendered_with.is_empty());
        assert_eq!(probe.borrow().destroyed, 1);
    }

    #[test]
    fn exit_restores_deck_and_clears_everything() {
        let (mut controller, probe) = controller_with_probe();
        controller.enter_game_mode("probe", "p1");
        controller.confirm_play();
        controller.dispatcher().register(Box::new(|_| Ok(())));

        assert!(controller.exit_game_mode());
        assert_eq!(controller.mode(), Mode::Deck);
        assert!(controller.session().active().is_none());
        assert_eq!(controller.session().active_instance_id(), None);
        assert!(!controller.dispatcher().is_enabled());
        assert_eq!(controller.dispatcher().listener_count(), 0);
        assert!(controller.game_layer().is_empty());
        assert_eq!(probe.borrow().destroyed, 1);
    }

    #[test]
    fn exit_outside_game_mode_is_rejected() {
        let (mut controller, probe) = controller_with_probe();
        assert!(!controller.exit_game_mode());
        assert_eq!(probe.borrow().destroyed, 0);
    }

    #[test]
    fn destroy_failure_does_not_block_exit() {
        let (mut controller, probe) = controller_with_probe();
        probe.borrow_mut().fail_destroy = true;

        controller.enter_game_mode("probe", "p1");
        controller.confirm_play();

        assert!(controller.exit_game_mode());
        assert_eq!(controller.mode(), Mode::Deck);
        assert!(controller.session().active().is_none());
        assert!(!controller.dispatcher().is_enabled());
    }

    #[test]
    fn stale_exit_request_is_dropped_on_exit() {
        let (mut controller, _probe) = controller_with_probe();
        let exit = controller.exit.clone();

        controller.enter_game_mode("probe", "p1");
        controller.confirm_play();
        exit.request();
        controller.exit_game_mode();

        assert!(!controller.take_exit_request());
    }
}
