//! Round parsing from generated text.
//!
//! The model is asked for a JSON array of rounds, but real responses wrap
//! the array in prose or a fenced code block often enough that parsing
//! tries, in order:
//!
//! 1. each ` ``` ` fenced block in the response,
//! 2. the whole response as JSON,
//! 3. the slice between the first `[` and the last `]`.
//!
//! Whatever parses must still satisfy the model invariants: at least one
//! round, every round has questions, every question has options.

use crate::quiz::entities::Round;
use thiserror::Error;

/// Errors raised while turning generated text into rounds
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Response is not a JSON array of rounds: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("Response contains no rounds")]
    NoRounds,

    #[error("Round \"{0}\" has no questions")]
    RoundWithoutQuestions(String),

    #[error("Question \"{0}\" has no options")]
    QuestionWithoutOptions(String),
}

/// Parse generated text into the quiz's round sequence.
pub fn parse_rounds(text: &str) -> Result<Vec<Round>, ParseError> {
    let mut last_error = None;

    for candidate in candidates(text) {
        match serde_json::from_str::<Vec<Round>>(candidate) {
            Ok(rounds) => return validate(rounds),
            Err(e) => last_error = Some(e),
        }
    }

    match last_error {
        Some(e) => Err(ParseError::Syntax(e)),
        None => Err(ParseError::NoRounds),
    }
}

/// Candidate JSON payloads within the response, most specific first.
fn candidates(text: &str) -> Vec<&str> {
    let mut found = fenced_blocks(text);
    found.push(text.trim());
    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']'))
        && start < end
    {
        found.push(&text[start..=end]);
    }
    found
}

/// Contents of every ` ``` ` fenced block, language tag stripped.
fn fenced_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("```") {
        let after_open = &rest[open + 3..];
        // Skip the language tag line (e.g. "json")
        let body_start = after_open.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after_open[body_start..];
        let Some(close) = body.find("```") else {
            break;
        };
        blocks.push(body[..close].trim());
        rest = &body[close + 3..];
    }
    blocks
}

fn validate(rounds: Vec<Round>) -> Result<Vec<Round>, ParseError> {
    if rounds.is_empty() {
        return Err(ParseError::NoRounds);
    }
    for round in &rounds {
        if round.questions.is_empty() {
            return Err(ParseError::RoundWithoutQuestions(round.title.clone()));
        }
        for question in &round.questions {
            if question.options.is_empty() {
                return Err(ParseError::QuestionWithoutOptions(question.question.clone()));
            }
        }
    }
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUNDS_JSON: &str = r#"[
        {
            "title": "Известные физики",
            "timePerQuestion": 30,
            "questions": [
                {
                    "question": "Кто сформулировал законы механики?",
                    "options": ["Ньютон", "Галилей", "Кеплер"],
                    "correctAnswer": "Ньютон"
                }
            ]
        },
        {
            "title": "Задача",
            "totalTime": 300,
            "questions": [
                {
                    "question": "Тело падает 3 секунды. Какова его скорость?",
                    "options": ["~30 м/с", "~10 м/с", "~90 м/с"],
                    "timeLimit": 300
                }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_raw_json_array() {
        let rounds = parse_rounds(ROUNDS_JSON).unwrap();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].title, "Известные физики");
        assert_eq!(rounds[1].total_time, Some(300));
    }

    #[test]
    fn test_parse_fenced_block() {
        let text = format!("Вот викторина:\n```json\n{ROUNDS_JSON}\n```\nУдачи!");
        let rounds = parse_rounds(&text).unwrap();
        assert_eq!(rounds.len(), 2);
    }

    #[test]
    fn test_parse_array_embedded_in_prose() {
        let text = format!("Конечно! {ROUNDS_JSON} — готово.");
        let rounds = parse_rounds(&text).unwrap();
        assert_eq!(rounds.len(), 2);
    }

    #[test]
    fn test_not_json_is_an_error() {
        let err = parse_rounds("Извините, не могу создать викторину.").unwrap_err();
        assert!(matches!(err, ParseError::Syntax(_) | ParseError::NoRounds));
    }

    #[test]
    fn test_empty_array_is_rejected() {
        assert!(matches!(parse_rounds("[]"), Err(ParseError::NoRounds)));
    }

    #[test]
    fn test_round_without_questions_is_rejected() {
        let text = r#"[{"title": "Пустой раунд", "questions": []}]"#;
        assert!(matches!(
            parse_rounds(text),
            Err(ParseError::RoundWithoutQuestions(_))
        ));
    }

    #[test]
    fn test_question_without_options_is_rejected() {
        let text = r#"[{
            "title": "Раунд",
            "questions": [{"question": "Без вариантов?", "options": []}]
        }]"#;
        assert!(matches!(
            parse_rounds(text),
            Err(ParseError::QuestionWithoutOptions(_))
        ));
    }
}
