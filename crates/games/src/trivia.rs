//! Trivia game module: question -> multiple choice -> feedback.
//!
//! Each question runs a small unanswered -> answered step; the sequence ends
//! on a results screen with the accumulated score, a percentage, and a
//! bucketed feedback message. Digits 1-4 answer, Enter (or Space) advances,
//! and the results screen offers replay or a return to the deck.

use std::cell::RefCell;
use std::rc::Rc;

use tui_deck_core::{DispatcherHandle, ExitSignal, GameError, GameModule, Line, Mount};
use tui_deck_types::{Key, TextStyle, FEEDBACK_GREAT_MIN, FEEDBACK_OK_MIN, FEEDBACK_PERFECT};

/// One multiple-choice question.
pub struct Question {
    pub prompt: &'static str,
    pub choices: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

/// The fixed question sequence.
///
/// Content placeholder until questions load from the deck document.
const QUESTIONS: [Question; 3] = [
    Question {
        prompt: "Geelong is located in which Australian state?",
        choices: [
            "New South Wales",
            "Victoria",
            "Queensland",
            "South Australia",
        ],
        correct: 1,
        explanation: "Geelong is Victoria's second-largest city, located on the Corio Bay.",
    },
    Question {
        prompt: "What is the approximate distance between Melbourne Airport and Geelong?",
        choices: ["35 km", "55 km", "75 km", "95 km"],
        correct: 2,
        explanation: "The journey is approximately 75 kilometers and takes about an hour by bus.",
    },
    Question {
        prompt: "Which famous Australian rules football team is based in Geelong?",
        choices: ["The Cats", "The Tigers", "The Eagles", "The Magpies"],
        correct: 0,
        explanation: "The Geelong Cats (nicknamed \"The Cats\") are one of the AFL's most successful clubs.",
    },
];

/// Integer percentage for a score out of `total`, rounded half-up.
pub fn score_percent(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Feedback message for a final percentage.
pub fn feedback_message(percent: u32) -> &'static str {
    if percent >= FEEDBACK_PERFECT {
        "Perfect score! You know your stuff!"
    } else if percent >= FEEDBACK_GREAT_MIN {
        "Great job! You did really well!"
    } else if percent >= FEEDBACK_OK_MIN {
        "Not bad! Keep learning!"
    } else {
        "Give it another try!"
    }
}

#[derive(Default)]
struct TriviaState {
    current: usize,
    score: u32,
    answered: bool,
    mount: Option<Mount>,
}

impl TriviaState {
    fn total() -> usize {
        QUESTIONS.len()
    }

    fn finished(&self) -> bool {
        self.current >= Self::total()
    }

    fn reset_run(&mut self) {
        self.current = 0;
        self.score = 0;
        self.answered = false;
    }

    fn handle_key(&mut self, key: &Key, exit: &ExitSignal) {
        if self.finished() {
            match key {
                Key::Enter | Key::Char('r') => {
                    self.reset_run();
                    self.paint_question();
                }
                Key::Char('b') => exit.request(),
                _ => {}
            }
            return;
        }

        if self.answered {
            if matches!(key, Key::Enter | Key::Char(' ')) {
                self.advance();
            }
            return;
        }

        if let Some(digit) = key.digit() {
            let choice = digit as usize;
            if (1..=QUESTIONS[self.current].choices.len()).contains(&choice) {
                self.answer(choice - 1);
            }
        }
    }

    fn answer(&mut self, choice: usize) {
        if self.answered {
            return;
        }

        let question = &QUESTIONS[self.current];
        let correct = choice == question.correct;
        self.answered = true;
        if correct {
            self.score += 1;
        }
        self.paint_answered(choice, correct);
    }

    fn advance(&mut self) {
        self.current += 1;
        self.answered = false;
        if self.finished() {
            self.paint_results();
        } else {
            self.paint_question();
        }
    }

    fn question_header(&self, lines: &mut Vec<Line>) {
        let question = &QUESTIONS[self.current];
        lines.push(Line::new(
            TextStyle::Kicker,
            format!("Question {} of {}", self.current + 1, Self::total()),
        ));
        lines.push(Line::new(TextStyle::Title, question.prompt));
        lines.push(Line::blank());
    }

    fn paint_question(&self) {
        let Some(mount) = &self.mount else {
            return;
        };
        let question = &QUESTIONS[self.current];

        let mut lines = Vec::new();
        self.question_header(&mut lines);
        for (idx, choice) in question.choices.iter().enumerate() {
            lines.push(Line::new(
                TextStyle::Choice,
                format!("{}. {}", idx + 1, choice),
            ));
        }
        lines.push(Line::blank());
        lines.push(Line::new(
            TextStyle::Score,
            format!("Score: {}/{}", self.score, self.current),
        ));
        lines.push(Line::new(TextStyle::Hint, "1-4  answer"));

        mount.replace(lines);
    }

    fn paint_answered(&self, selected: usize, correct: bool) {
        let Some(mount) = &self.mount else {
            return;
        };
        let question = &QUESTIONS[self.current];

        let mut lines = Vec::new();
        self.question_header(&mut lines);
        for (idx, choice) in question.choices.iter().enumerate() {
            let style = if idx == question.correct {
                TextStyle::Correct
            } else if idx == selected {
                TextStyle::Incorrect
            } else {
                TextStyle::Muted
            };
            lines.push(Line::new(style, format!("{}. {}", idx + 1, choice)));
        }
        lines.push(Line::blank());
        if correct {
            lines.push(Line::new(TextStyle::Correct, "\u{2713} Correct!"));
        } else {
            lines.push(Line::new(TextStyle::Incorrect, "\u{2717} Incorrect"));
        }
        lines.push(Line::new(TextStyle::Body, question.explanation));
        lines.push(Line::blank());
        let next_hint = if self.current + 1 < Self::total() {
            "enter  next question"
        } else {
            "enter  see final score"
        };
        lines.push(Line::new(TextStyle::Hint, next_hint));

        mount.replace(lines);
    }

    fn paint_results(&self) {
        let Some(mount) = &self.mount else {
            return;
        };
        let total = Self::total() as u32;
        let percent = score_percent(self.score, total);

        mount.replace(vec![
            Line::new(TextStyle::Title, "Quiz Complete!"),
            Line::blank(),
            Line::new(TextStyle::Score, format!("{} / {}", self.score, total)),
            Line::new(TextStyle::Muted, format!("{percent}%")),
            Line::blank(),
            Line::new(TextStyle::Body, feedback_message(percent)),
            Line::blank(),
            Line::new(
                TextStyle::Hint,
                "enter  play again   \u{b7}   b  back to deck",
            ),
        ]);
    }
}

/// The trivia game module.
pub struct TriviaGame {
    dispatcher: DispatcherHandle,
    exit: ExitSignal,
    state: Rc<RefCell<TriviaState>>,
}

impl TriviaGame {
    pub fn new(dispatcher: DispatcherHandle, exit: ExitSignal) -> Self {
        Self {
            dispatcher,
            exit,
            state: Rc::default(),
        }
    }
}

impl GameModule for TriviaGame {
    fn title(&self) -> &str {
        "Daily Trivia"
    }

    fn instructions(&self) -> &str {
        "Test your knowledge with quick trivia questions.\n\
         Press 1-4 to pick the answer you think is correct. You will get instant feedback!"
    }

    fn render(&mut self, mount: &Mount, _instance_id: &str) -> Result<(), GameError> {
        {
            let mut state = self.state.borrow_mut();
            state.reset_run();
            state.mount = Some(mount.clone());
            state.paint_question();
        }

        let state = Rc::clone(&self.state);
        let exit = self.exit.clone();
        self.dispatcher.register(Box::new(move |key| {
            state.borrow_mut().handle_key(key, &exit);
            Ok(())
        }));
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), GameError> {
        *self.state.borrow_mut() = TriviaState::default();
        Ok(())
    }
}
