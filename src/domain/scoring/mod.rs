//! Scoring engine: per-response rating index, satisfaction index (IKM),
//! and the grading table.

mod grade;
mod index;

pub use grade::{GradeBand, GradingScale, NO_GRADE};
pub use index::{RatingIndex, SatisfactionIndex};
