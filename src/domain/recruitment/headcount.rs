//! Headcount value object (2, 3, 5 or 10 players).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::validation::ValidationError;

/// Target number of participants for a recruitment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Headcount {
    Two = 2,
    Three = 3,
    #[default]
    Five = 5,
    Ten = 10,
}

impl Headcount {
    /// Every accepted headcount, smallest first.
    pub const ALL: [Headcount; 4] = [
        Headcount::Two,
        Headcount::Three,
        Headcount::Five,
        Headcount::Ten,
    ];

    /// Creates a Headcount from an integer, returning error if not accepted.
    pub fn try_from_value(value: i64) -> Result<Self, ValidationError> {
        match value {
            2 => Ok(Headcount::Two),
            3 => Ok(Headcount::Three),
            5 => Ok(Headcount::Five),
            10 => Ok(Headcount::Ten),
            _ => Err(ValidationError::invalid_headcount(value)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Headcount {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_value(i64::from(value))
    }
}

impl From<Headcount> for u8 {
    fn from(headcount: Headcount) -> Self {
        headcount.value()
    }
}

impl fmt::Display for Headcount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
