//! End-to-end trivia run through the controller and dispatcher.

use tui_deck::core::{DispatcherHandle, ExitSignal, GameRegistry, ModeController, Session};
use tui_deck::games::register_builtin;
use tui_deck::types::{GamePhase, Key, Mode};

fn playing_controller() -> (ModeController, DispatcherHandle) {
    let dispatcher = DispatcherHandle::new();
    let exit = ExitSignal::new();
    let mut registry = GameRegistry::new();
    register_builtin(&mut registry, &dispatcher, &exit);
    let mut controller = ModeController::new(Session::new(), registry, dispatcher.clone(), exit);

    assert!(controller.enter_game_mode("trivia", "trivia-01"));
    assert!(controller.confirm_play());
    (controller, dispatcher)
}

fn layer_text(controller: &ModeController) -> String {
    controller
        .game_layer()
        .lines()
        .into_iter()
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_two_of_three_scores_67_percent() {
    let (controller, dispatcher) = playing_controller();

    // Question 1: correct (Victoria).
    dispatcher.dispatch(&Key::Char('2'));
    assert!(layer_text(&controller).contains("\u{2713} Correct!"));
    dispatcher.dispatch(&Key::Enter);

    // Question 2: correct (75 km).
    dispatcher.dispatch(&Key::Char('3'));
    dispatcher.dispatch(&Key::Enter);

    // Question 3: incorrect.
    dispatcher.dispatch(&Key::Char('2'));
    assert!(layer_text(&controller).contains("\u{2717} Incorrect"));
    dispatcher.dispatch(&Key::Enter);

    let text = layer_text(&controller);
    assert!(text.contains("Quiz Complete!"));
    assert!(text.contains("2 / 3"));
    assert!(text.contains("67%"));
    assert!(text.contains("Not bad! Keep learning!"));
}

#[test]
fn test_answer_keys_outside_1_to_4_are_ignored() {
    let (controller, dispatcher) = playing_controller();

    dispatcher.dispatch(&Key::Char('5'));
    dispatcher.dispatch(&Key::Char('0'));
    dispatcher.dispatch(&Key::Char('x'));

    let text = layer_text(&controller);
    assert!(text.contains("Question 1 of 3"));
    assert!(!text.contains("Correct"));
}

#[test]
fn test_space_also_advances_after_answer() {
    let (controller, dispatcher) = playing_controller();

    dispatcher.dispatch(&Key::Char('1'));
    dispatcher.dispatch(&Key::Char(' '));
    assert!(layer_text(&controller).contains("Question 2 of 3"));
}

#[test]
fn test_play_again_resets_the_run() {
    let (controller, dispatcher) = playing_controller();

    for _ in 0..3 {
        dispatcher.dispatch(&Key::Char('1'));
        dispatcher.dispatch(&Key::Enter);
    }
    assert!(layer_text(&controller).contains("Quiz Complete!"));

    dispatcher.dispatch(&Key::Enter);
    let text = layer_text(&controller);
    assert!(text.contains("Question 1 of 3"));
    assert!(text.contains("Score: 0/0"));
    // Replay reuses the registered listener instead of stacking another.
    assert_eq!(dispatcher.listener_count(), 1);
}

#[test]
fn test_results_back_key_requests_exit() {
    let (mut controller, dispatcher) = playing_controller();

    for _ in 0..3 {
        dispatcher.dispatch(&Key::Char('1'));
        dispatcher.dispatch(&Key::Enter);
    }
    dispatcher.dispatch(&Key::Char('b'));

    assert!(controller.take_exit_request());
    assert!(controller.exit_game_mode());
    assert_eq!(controller.mode(), Mode::Deck);
    assert_eq!(dispatcher.listener_count(), 0);
}

#[test]
fn test_exit_then_replay_starts_clean() {
    let (mut controller, dispatcher) = playing_controller();

    // Score one point, then bail mid-run.
    dispatcher.dispatch(&Key::Char('2'));
    assert!(controller.exit_game_mode());

    // Re-enter: the fresh run shows question 1 with a zero score.
    assert!(controller.enter_game_mode("trivia", "trivia-01"));
    assert_eq!(controller.game_phase(), Some(GamePhase::Intro));
    assert!(controller.confirm_play());

    let text = layer_text(&controller);
    assert!(text.contains("Question 1 of 3"));
    assert!(text.contains("Score: 0/0"));
    assert_eq!(dispatcher.listener_count(), 1);
}
