//! Quiz topic value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Quiz topic (Value Object)
///
/// The fixed set of topics offered at team setup. The Russian name is the
/// canonical form: it is shown in the UI and embedded verbatim in the
/// generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
    /// Физика
    Physics,
    /// Информатика
    Informatics,
}

impl Topic {
    /// All topics, in the order they are offered at setup
    pub fn all() -> [Topic; 2] {
        [Topic::Physics, Topic::Informatics]
    }

    /// Russian display name, as shown in the topic selector
    pub fn name_ru(self) -> &'static str {
        match self {
            Topic::Physics => "Физика",
            Topic::Informatics => "Информатика",
        }
    }
}

impl Default for Topic {
    fn default() -> Self {
        Topic::Physics
    }
}

impl FromStr for Topic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Физика" | "физика" | "physics" => Ok(Topic::Physics),
            "Информатика" | "информатика" | "informatics" => Ok(Topic::Informatics),
            other => Err(DomainError::UnknownTopic(other.to_string())),
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_ru())
    }
}
