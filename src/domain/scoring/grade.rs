//! Service quality grading: the four-band table mapped from the
//! satisfaction index.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::SatisfactionIndex;

/// Sentinel shown wherever no grade is defined (empty collections).
pub const NO_GRADE: &str = "—";

/// One grading band, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    pub min: f64,
    pub max: f64,
    pub letter: String,
    pub label: String,
}

impl GradeBand {
    pub fn new(min: f64, max: f64, letter: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            letter: letter.into(),
            label: label.into(),
        }
    }

    /// True when the index falls inside this band.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.letter, self.label)
    }
}

/// Ordered, non-overlapping grading bands, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradingScale(Vec<GradeBand>);

impl GradingScale {
    /// Creates a scale from bands ordered highest first.
    pub fn new(bands: Vec<GradeBand>) -> Self {
        Self(bands)
    }

    /// The standard four-band IKM table.
    pub fn standard() -> Self {
        Self(vec![
            GradeBand::new(88.31, 100.0, "A", "Very Good"),
            GradeBand::new(76.61, 88.30, "B", "Good"),
            GradeBand::new(65.00, 76.60, "C", "Poor"),
            GradeBand::new(0.0, 64.99, "D", "Bad"),
        ])
    }

    /// The configured bands, highest first.
    pub fn bands(&self) -> &[GradeBand] {
        &self.0
    }

    /// Checks that the scale is non-empty and ordered highest first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            return Err(ValidationError::empty_field("grading"));
        }
        for pair in self.0.windows(2) {
            if pair[1].min >= pair[0].min {
                return Err(ValidationError::invalid_format(
                    "grading",
                    "bands must be ordered highest first",
                ));
            }
        }
        Ok(())
    }

    /// Selects the band for an index by descending minimum, highest band
    /// first. The `max` bound is display information; selection only uses
    /// the thresholds, so every value down to the lowest band's minimum
    /// lands in exactly one band.
    ///
    /// Returns `None` when the collection behind the index was empty
    /// (`total_count == 0`); a zero computed over no responses is not a
    /// score. Behavior for negative or NaN inputs is unspecified; callers
    /// only pass values produced by [`SatisfactionIndex::of`].
    pub fn grade_of(&self, index: SatisfactionIndex, total_count: usize) -> Option<&GradeBand> {
        if total_count == 0 {
            return None;
        }
        let value = index.value();
        self.0
            .iter()
            .find(|band| value >= band.min)
            .or_else(|| self.0.last())
    }
}

impl Default for GradingScale {
    fn default() -> Self {
        Self::standard()
    }
}
