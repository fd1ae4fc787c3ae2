//! Screen rendering
//!
//! Pure functions from state to text, so every screen is testable
//! without a terminal.

use crate::console::texts;
use colored::Colorize;
use viktorina_domain::{QuizState, RoundResult};

pub fn welcome_screen() -> String {
    format!(
        "\n{}\n\n{}\n\n[Enter] — далее, [q] — {}\n",
        texts::WELCOME_TITLE.blue().bold(),
        texts::WELCOME_DESCRIPTION,
        texts::QUIT_HINT,
    )
}

pub fn team_setup_header() -> String {
    format!("\n{}\n", texts::TEAM_SETUP_TITLE.blue().bold())
}

pub fn question_screen(state: &QuizState) -> String {
    let (Some(round), Some(question)) = (state.current_round(), state.current_question()) else {
        return String::new();
    };

    let mut out = format!(
        "\n{} — {}\n\n",
        texts::QUIZ_TITLE.blue().bold(),
        round.title.bold()
    );
    out.push_str(&format!(
        "Вопрос {} из {}: {}\n\n",
        state.question_index + 1,
        round.question_count(),
        question.question.bold()
    ));

    let selected = state.answers.selected(state.round_index, state.question_index);
    for (index, option) in question.options.iter().enumerate() {
        if selected == Some(option.as_str()) {
            out.push_str(&format!("  [{}] {} ✓\n", index + 1, option.blue().bold()));
        } else {
            out.push_str(&format!("  [{}] {}\n", index + 1, option));
        }
    }

    out.push_str(&format!("\n{}\n", timer_line(state.time_left)));
    out.push_str(&format!(
        "\n[1-9] — выбрать ответ, [Enter] — далее, [b] — {}, [q] — {}\n",
        texts::BACK_HINT,
        texts::QUIT_HINT,
    ));
    out
}

pub fn timer_line(seconds: u32) -> String {
    format!("{}{} секунд", texts::QUESTION_TIMER, seconds)
}

pub fn error_screen() -> String {
    format!(
        "\n{}\n\n[Enter] — попробовать снова, [q] — {}\n",
        texts::ERROR_TEXT.red(),
        texts::QUIT_HINT,
    )
}

pub fn results_screen(results: &[RoundResult]) -> String {
    let mut out = format!("\n{}\n\n", texts::RESULTS_TITLE.blue().bold());
    out.push_str("Спасибо за участие! Ваши результаты:\n");
    for result in results {
        // Source wording kept as-is: the tally counts completed answers
        out.push_str(&format!(
            "  {}: {} из {} правильных ответов\n",
            result.title.bold(),
            result.answered,
            result.total
        ));
    }
    out.push_str(&format!(
        "\n[Enter] — начать заново, [q] — {}\n",
        texts::QUIT_HINT
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use viktorina_domain::{
        AnswerSheet, FetchStatus, Question, QuizState, Round, Step,
    };

    fn quiz_state() -> QuizState {
        let rounds = vec![Round {
            title: "Известные физики".to_string(),
            questions: vec![Question {
                question: "Кто открыл гравитацию?".to_string(),
                options: vec!["Ньютон".to_string(), "Кеплер".to_string()],
                correct_answer: None,
                time_limit: None,
            }],
            time_per_question: Some(30),
            total_time: None,
        }];
        let mut state = QuizState::new();
        state.step = Step::Quiz;
        state.fetch = FetchStatus::Ready;
        state.answers = AnswerSheet::for_rounds(&rounds);
        state.rounds = rounds;
        state.time_left = 30;
        state
    }

    #[test]
    fn test_question_screen_lists_numbered_options() {
        let screen = question_screen(&quiz_state());
        assert!(screen.contains("Известные физики"));
        assert!(screen.contains("[1]"));
        assert!(screen.contains("Ньютон"));
        assert!(screen.contains("[2]"));
        assert!(screen.contains("30 секунд"));
    }

    #[test]
    fn test_selected_option_is_marked() {
        let mut state = quiz_state();
        state.answers.select(0, 0, "Кеплер");
        let screen = question_screen(&state);
        assert!(screen.contains('✓'));
    }

    #[test]
    fn test_results_screen_counts() {
        let results = vec![RoundResult {
            title: "Раунд 1".to_string(),
            answered: 2,
            total: 3,
        }];
        let screen = results_screen(&results);
        assert!(screen.contains("2 из 3"));
        assert!(screen.contains("Спасибо за участие"));
    }

    #[test]
    fn test_welcome_and_error_use_fixed_texts() {
        assert!(welcome_screen().contains(texts::WELCOME_TITLE));
        assert!(error_screen().contains(texts::ERROR_TEXT));
    }
}
