//! Rating value object for the four-point survey scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Survey answer rating: 1 (very dissatisfied) to 4 (very satisfied).
///
/// Serializes as its numeric value, matching the wire and storage formats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    VeryDissatisfied = 1,
    Dissatisfied = 2,
    Satisfied = 3,
    VerySatisfied = 4,
}

impl Rating {
    /// Lowest rating on the scale.
    pub const MIN: Rating = Rating::VeryDissatisfied;

    /// Highest rating on the scale.
    pub const MAX: Rating = Rating::VerySatisfied;

    /// All ratings in ascending order.
    pub const ALL: [Rating; 4] = [
        Rating::VeryDissatisfied,
        Rating::Dissatisfied,
        Rating::Satisfied,
        Rating::VerySatisfied,
    ];

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Rating::VeryDissatisfied),
            2 => Ok(Rating::Dissatisfied),
            3 => Ok(Rating::Satisfied),
            4 => Ok(Rating::VerySatisfied),
            _ => Err(ValidationError::out_of_range("rating", 1, 4, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the generic display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::VeryDissatisfied => "Very Dissatisfied",
            Rating::Dissatisfied => "Dissatisfied",
            Rating::Satisfied => "Satisfied",
            Rating::VerySatisfied => "Very Satisfied",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
