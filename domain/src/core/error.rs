//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid class grade: {0} (expected 7-11)")]
    InvalidGrade(u8),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Team setup is incomplete: {0} is empty")]
    IncompleteSetup(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_grade_display() {
        let error = DomainError::InvalidGrade(6);
        assert_eq!(error.to_string(), "Invalid class grade: 6 (expected 7-11)");
    }

    #[test]
    fn test_incomplete_setup_display() {
        let error = DomainError::IncompleteSetup("teamName");
        assert!(error.to_string().contains("teamName"));
    }
}
