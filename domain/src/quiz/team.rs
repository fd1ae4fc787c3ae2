//! Team setup entity

use crate::core::{ClassGrade, DomainError, Topic};
use serde::{Deserialize, Serialize};

/// Everything the team enters before the quiz starts.
///
/// Mutated by setup-screen events, read-only once the quiz begins.
/// `team_members` is free text; the original UI suggests a comma-separated
/// list but nothing splits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSetup {
    pub team_name: String,
    pub team_members: String,
    pub curator: String,
    pub class_grade: ClassGrade,
    pub topic: Topic,
}

impl TeamSetup {
    /// The quiz may start only when every text field is non-blank.
    /// Grade and topic are enums and therefore always set.
    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none()
    }

    /// Check completeness, naming the offending field on failure.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.first_missing_field() {
            None => Ok(()),
            Some(field) => Err(DomainError::IncompleteSetup(field)),
        }
    }

    /// Name of the first blank required field, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.team_name.trim().is_empty() {
            Some("teamName")
        } else if self.team_members.trim().is_empty() {
            Some("teamMembers")
        } else if self.curator.trim().is_empty() {
            Some("curator")
        } else {
            None
        }
    }
}
