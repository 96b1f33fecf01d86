//! Rating and satisfaction index value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;
use crate::domain::response::AnswerSet;
use crate::domain::scheme::QuestionDef;

/// Per-response mean of the question answers, range [1.0, 4.0].
///
/// Derived exactly once at submission and stored redundantly; it is never
/// edited afterwards.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingIndex(f64);

impl RatingIndex {
    /// Computes the arithmetic mean of the answers for the given question
    /// set. Fails when any configured question has no answer; answer values
    /// are range-checked by construction.
    pub fn compute(answers: &AnswerSet, questions: &[QuestionDef]) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        let mut sum = 0u32;
        for question in questions {
            let rating = answers
                .get(&question.id)
                .ok_or_else(|| ValidationError::missing_answer(question.id.as_str()))?;
            sum += rating.value() as u32;
        }
        Ok(Self(f64::from(sum) / questions.len() as f64))
    }

    /// Wraps a value already computed at submission time, as read back from
    /// the store. Not re-validated.
    pub fn from_stored(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw mean.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for RatingIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Community satisfaction index (IKM): mean rating index scaled by 25,
/// range [25.0, 100.0] for non-empty collections.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SatisfactionIndex(f64);

impl SatisfactionIndex {
    /// Scale factor from the four-point rating mean to the 100-point index.
    pub const SCALE: f64 = 25.0;

    /// Computes the index over a collection of rating indices.
    ///
    /// An empty collection yields 0; callers must treat count = 0 specially
    /// and never present the zero as a real score.
    pub fn of(indices: &[RatingIndex]) -> Self {
        if indices.is_empty() {
            return Self(0.0);
        }
        let sum: f64 = indices.iter().map(|i| i.value()).sum();
        Self(sum / indices.len() as f64 * Self::SCALE)
    }

    /// The index of a single response.
    pub fn of_single(index: RatingIndex) -> Self {
        Self(index.value() * Self::SCALE)
    }

    /// Wraps an already-scaled index value (stored aggregates, tests).
    pub fn from_value(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw index value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for SatisfactionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
