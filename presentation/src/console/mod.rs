//! Interactive console front-end
//!
//! Drives one quiz session: reads lines from stdin, ticks the question
//! clock once per second and feeds fetch outcomes back into the
//! controller, all interleaved on a single `select!` loop so only one
//! timer is ever active.

pub mod texts;

mod progress;
mod render;

pub use progress::SpinnerProgress;

use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use viktorina_application::QuizController;
use viktorina_domain::{ClassGrade, FetchStatus, QuizEvent, Step, Topic, round_results};

/// Which setup form field is currently being asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupField {
    Name,
    Members,
    Curator,
    Grade,
    Topic,
}

/// The console quiz front-end
pub struct QuizConsole {
    controller: QuizController,
    outcomes: mpsc::Receiver<QuizEvent>,
    setup_field: Option<SetupField>,
}

impl QuizConsole {
    pub fn new(controller: QuizController, outcomes: mpsc::Receiver<QuizEvent>) -> Self {
        Self {
            controller,
            outcomes,
            setup_field: None,
        }
    }

    /// Run until the user quits or stdin closes.
    pub async fn run(mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        println!("{}", render::welcome_screen());

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if !self.handle_line(line.trim()) {
                                break;
                            }
                        }
                        None => break,
                    }
                }
                Some(event) = self.outcomes.recv() => self.handle_outcome(event),
                _ = ticker.tick() => self.handle_tick(),
            }
        }

        Ok(())
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, input: &str) -> bool {
        if input == "q" {
            return false;
        }

        match self.controller.state().step {
            Step::Welcome => {
                self.controller.apply(QuizEvent::BeginSetup);
                self.setup_field = Some(SetupField::Name);
                println!("{}", render::team_setup_header());
                self.prompt_current_field();
            }
            Step::TeamSetup => self.handle_setup_line(input),
            Step::Quiz => {
                let fetch = self.controller.state().fetch.clone();
                match fetch {
                    FetchStatus::Ready => self.handle_quiz_line(input),
                    FetchStatus::Failed(_) if input.is_empty() => {
                        // Explicit re-initiation after a failed fetch
                        self.controller.start_quiz();
                    }
                    _ => {}
                }
            }
            Step::Results => {
                self.controller.apply(QuizEvent::Restart);
                println!("{}", render::welcome_screen());
            }
        }

        true
    }

    fn handle_setup_line(&mut self, input: &str) {
        let Some(field) = self.setup_field else {
            return;
        };

        if input == "b" || input == texts::BACK_HINT {
            self.controller.apply(QuizEvent::BackToWelcome);
            self.setup_field = None;
            println!("{}", render::welcome_screen());
            return;
        }

        match field {
            SetupField::Name | SetupField::Members | SetupField::Curator => {
                if input.is_empty() {
                    self.prompt_current_field();
                    return;
                }
                let event = match field {
                    SetupField::Name => QuizEvent::SetTeamName(input.to_string()),
                    SetupField::Members => QuizEvent::SetTeamMembers(input.to_string()),
                    _ => QuizEvent::SetCurator(input.to_string()),
                };
                self.controller.apply(event);
                self.setup_field = Some(match field {
                    SetupField::Name => SetupField::Members,
                    SetupField::Members => SetupField::Curator,
                    _ => SetupField::Grade,
                });
            }
            SetupField::Grade => {
                if !input.is_empty() {
                    match input.parse::<ClassGrade>() {
                        Ok(grade) => self.controller.apply(QuizEvent::SetGrade(grade)),
                        Err(_) => {
                            println!("Введите класс от 7 до 11");
                            self.prompt_current_field();
                            return;
                        }
                    }
                }
                self.setup_field = Some(SetupField::Topic);
            }
            SetupField::Topic => {
                let topic = match input {
                    "" | "1" => Topic::Physics,
                    "2" => Topic::Informatics,
                    other => match other.parse::<Topic>() {
                        Ok(topic) => topic,
                        Err(_) => {
                            println!("Выберите 1 или 2");
                            self.prompt_current_field();
                            return;
                        }
                    },
                };
                self.controller.apply(QuizEvent::SetTopic(topic));
                self.setup_field = None;
                // All text fields were validated non-empty above, so the
                // start is accepted and the spinner takes over
                self.controller.start_quiz();
                return;
            }
        }

        self.prompt_current_field();
    }

    fn handle_quiz_line(&mut self, input: &str) {
        match input {
            "" | "n" => {
                self.controller.apply(QuizEvent::Advance);
                self.render_position();
            }
            "b" => {
                self.controller.apply(QuizEvent::Retreat);
                self.render_position();
            }
            other => {
                let Ok(number) = other.parse::<usize>() else {
                    return;
                };
                let option = self
                    .controller
                    .state()
                    .current_question()
                    .and_then(|question| question.options.get(number.wrapping_sub(1)))
                    .cloned();
                if let Some(option) = option {
                    self.controller.apply(QuizEvent::SelectAnswer(option));
                    println!("{}", render::question_screen(self.controller.state()));
                }
            }
        }
    }

    fn handle_outcome(&mut self, event: QuizEvent) {
        self.controller.apply(event);
        match &self.controller.state().fetch {
            FetchStatus::Ready => println!("{}", render::question_screen(self.controller.state())),
            FetchStatus::Failed(_) => println!("{}", render::error_screen()),
            _ => {}
        }
    }

    fn handle_tick(&mut self) {
        if !self.controller.state().showing_questions() {
            return;
        }

        let before = {
            let state = self.controller.state();
            (state.round_index, state.question_index)
        };

        self.controller.apply(QuizEvent::Tick);

        let state = self.controller.state();
        if state.step == Step::Results {
            println!(
                "{}",
                render::results_screen(&round_results(&state.rounds, &state.answers))
            );
        } else if (state.round_index, state.question_index) != before {
            println!("{}", render::question_screen(state));
        } else {
            print!("\r{}   ", render::timer_line(state.time_left));
            let _ = std::io::stdout().flush();
        }
    }

    fn render_position(&self) {
        let state = self.controller.state();
        if state.step == Step::Results {
            println!(
                "{}",
                render::results_screen(&round_results(&state.rounds, &state.answers))
            );
        } else {
            println!("{}", render::question_screen(state));
        }
    }

    fn prompt_current_field(&self) {
        let Some(field) = self.setup_field else {
            return;
        };
        let prompt = match field {
            SetupField::Name => format!("{}: ", texts::TEAM_NAME_LABEL),
            SetupField::Members => format!("{}: ", texts::TEAM_MEMBERS_LABEL),
            SetupField::Curator => format!("{}: ", texts::CURATOR_LABEL),
            SetupField::Grade => format!("{} (7-11) [7]: ", texts::CLASS_LABEL),
            SetupField::Topic => format!(
                "{}: 1 — Физика, 2 — Информатика [1]: ",
                texts::TOPIC_LABEL
            ),
        };
        print!("{}", prompt);
        let _ = std::io::stdout().flush();
    }
}
