//! Quiz data model: rounds, questions, team setup, answers and results

pub mod answers;
pub mod entities;
pub mod parsing;
pub mod results;
pub mod team;

pub use answers::AnswerSheet;
pub use entities::{DEFAULT_QUESTION_SECONDS, Question, Round};
pub use parsing::{ParseError, parse_rounds};
pub use results::{RoundResult, round_results};
pub use team::TeamSetup;
