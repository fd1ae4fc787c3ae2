//! Class grade value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// School grade of the participating team (Value Object)
///
/// The quiz targets the Russian school program, grades 7 through 11.
/// The numeric form is used both in the generation prompt and in the wire
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ClassGrade {
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
}

impl ClassGrade {
    /// All grades in ascending order, for selection menus
    pub fn all() -> [ClassGrade; 5] {
        [
            ClassGrade::Seventh,
            ClassGrade::Eighth,
            ClassGrade::Ninth,
            ClassGrade::Tenth,
            ClassGrade::Eleventh,
        ]
    }

    /// Numeric grade as used in prompts and serialized form
    pub fn as_number(self) -> u8 {
        match self {
            ClassGrade::Seventh => 7,
            ClassGrade::Eighth => 8,
            ClassGrade::Ninth => 9,
            ClassGrade::Tenth => 10,
            ClassGrade::Eleventh => 11,
        }
    }
}

impl Default for ClassGrade {
    fn default() -> Self {
        ClassGrade::Seventh
    }
}

impl TryFrom<u8> for ClassGrade {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(ClassGrade::Seventh),
            8 => Ok(ClassGrade::Eighth),
            9 => Ok(ClassGrade::Ninth),
            10 => Ok(ClassGrade::Tenth),
            11 => Ok(ClassGrade::Eleventh),
            other => Err(DomainError::InvalidGrade(other)),
        }
    }
}

impl From<ClassGrade> for u8 {
    fn from(grade: ClassGrade) -> u8 {
        grade.as_number()
    }
}

impl FromStr for ClassGrade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidGrade(0))?;
        ClassGrade::try_from(value)
    }
}

impl std::fmt::Display for ClassGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_roundtrip() {
        for grade in ClassGrade::all() {
            assert_eq!(ClassGrade::try_from(grade.as_number()).unwrap(), grade);
        }
    }

    #[test]
    fn test_grade_from_str() {
        assert_eq!("7".parse::<ClassGrade>().unwrap(), ClassGrade::Seventh);
        assert_eq!(" 11 ".parse::<ClassGrade>().unwrap(), ClassGrade::Eleventh);
        assert!("6".parse::<ClassGrade>().is_err());
        assert!("12".parse::<ClassGrade>().is_err());
        assert!("abc".parse::<ClassGrade>().is_err());
    }

    #[test]
    fn test_grade_serde_as_number() {
        let json = serde_json::to_string(&ClassGrade::Ninth).unwrap();
        assert_eq!(json, "9");
        let grade: ClassGrade = serde_json::from_str("10").unwrap();
        assert_eq!(grade, ClassGrade::Tenth);
    }

    #[test]
    fn test_default_is_seventh() {
        assert_eq!(ClassGrade::default(), ClassGrade::Seventh);
    }
}
