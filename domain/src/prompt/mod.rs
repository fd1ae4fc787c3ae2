//! Prompt templates for quiz generation

use crate::core::{ClassGrade, Topic};

/// Token budget for a full quiz generation request.
pub const QUIZ_MAX_TOKENS: u32 = 1500;

/// Templates for the generation request sent through the proxy
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the quiz generation prompt for the selected topic and grade.
    ///
    /// The text is in Russian and pins the response format to a JSON array
    /// of rounds; [`crate::quiz::parse_rounds`] expects exactly that shape.
    pub fn quiz_prompt(topic: Topic, grade: ClassGrade) -> String {
        match topic {
            Topic::Physics => format!(
                r#"
Создай викторину по физике для {grade} класса (школьная программа России) на русском языке.
Раунд 1: 3 вопроса про известных физиков/учёных с 3 вариантами ответа, время на вопрос 30 секунд.
Раунд 2: 3 вопроса про формулы и их величины, 3 варианта ответа, время на вопрос 30 секунд.
Раунд 3: 1 задача по физике, время на решение 5 минут.
Формат вывода: JSON массив раундов с вопросами, вариантами ответов и временем на вопрос.
"#
            ),
            Topic::Informatics => format!(
                r#"
Создай викторину по информатике для {grade} класса (школьная программа России) на русском языке.
Раунд 1: 3 вопроса про известные методы в информатике с 3 вариантами ответа, время на вопрос 30 секунд.
Раунд 2: 3 вопроса про различные величины в информатике с 3 вариантами ответа, время на вопрос 30 секунд.
Раунд 3: 1 задача по информатике, время на решение 5 минут.
Формат вывода: JSON массив раундов с вопросами, вариантами ответов и временем на вопрос.
"#
            ),
        }
    }
}
