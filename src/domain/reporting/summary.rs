//! Global and per-counter satisfaction summaries.

use serde::Serialize;

use crate::domain::foundation::CounterId;
use crate::domain::response::Response;
use crate::domain::scheme::SurveyScheme;
use crate::domain::scoring::{GradeBand, GradingScale, RatingIndex, SatisfactionIndex, NO_GRADE};

/// Aggregate over the whole response collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSummary {
    pub count: usize,
    pub index: SatisfactionIndex,
    pub grade: Option<GradeBand>,
}

impl GlobalSummary {
    /// Index for display: the sentinel when there is no data.
    pub fn index_display(&self) -> String {
        if self.count == 0 {
            NO_GRADE.to_string()
        } else {
            format!("{}", self.index)
        }
    }

    /// Grade for display: `"A (Very Good)"` or the sentinel.
    pub fn grade_display(&self) -> String {
        self.grade
            .as_ref()
            .map(|g| g.to_string())
            .unwrap_or_else(|| NO_GRADE.to_string())
    }
}

/// Aggregate over the responses of one counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSummary {
    pub counter_id: CounterId,
    pub count: usize,
    pub index: SatisfactionIndex,
    pub grade: Option<GradeBand>,
}

impl CounterSummary {
    pub fn index_display(&self) -> String {
        if self.count == 0 {
            NO_GRADE.to_string()
        } else {
            format!("{}", self.index)
        }
    }

    pub fn grade_display(&self) -> String {
        self.grade
            .as_ref()
            .map(|g| g.to_string())
            .unwrap_or_else(|| NO_GRADE.to_string())
    }
}

/// Aggregates the full collection: count, satisfaction index, grade.
///
/// Pure and order-independent.
pub fn aggregate_global(responses: &[Response], grading: &GradingScale) -> GlobalSummary {
    let indices: Vec<RatingIndex> = responses.iter().map(|r| r.rating_index).collect();
    let index = SatisfactionIndex::of(&indices);
    let count = responses.len();
    GlobalSummary {
        count,
        index,
        grade: grading.grade_of(index, count).cloned(),
    }
}

/// Aggregates per counter, one entry per configured counter id in ascending
/// order. Counters without responses still appear with count = 0 and no
/// grade; the dashboard renders all N counters regardless of data presence.
pub fn aggregate_by_counter(responses: &[Response], scheme: &SurveyScheme) -> Vec<CounterSummary> {
    scheme
        .counter_ids()
        .map(|counter_id| {
            let indices: Vec<RatingIndex> = responses
                .iter()
                .filter(|r| r.counter_id == counter_id)
                .map(|r| r.rating_index)
                .collect();
            let index = SatisfactionIndex::of(&indices);
            let count = indices.len();
            CounterSummary {
                counter_id,
                count,
                index,
                grade: scheme.grading.grade_of(index, count).cloned(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
