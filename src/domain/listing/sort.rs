//! Ordering of response collections for tabular display.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::CounterId;
use crate::domain::response::Response;

/// Column a response table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Date,
    Gender,
    Education,
    Occupation,
    Age,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Date => "date",
            SortKey::Gender => "gender",
            SortKey::Education => "education",
            SortKey::Occupation => "occupation",
            SortKey::Age => "age",
        };
        write!(f, "{}", s)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort column and direction of one table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Applies a header click: the active key flips direction, a new key
    /// resets to ascending.
    pub fn toggled(&self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortKey::Date, SortDirection::Asc)
    }
}

fn compare_by_key(a: &Response, b: &Response, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.submitted_at_or_epoch().cmp(&b.submitted_at_or_epoch()),
        SortKey::Gender => a
            .respondent
            .gender_sort_value()
            .cmp(b.respondent.gender_sort_value()),
        SortKey::Education => a
            .respondent
            .education_sort_value()
            .cmp(b.respondent.education_sort_value()),
        SortKey::Occupation => a
            .respondent
            .occupation_sort_value()
            .cmp(b.respondent.occupation_sort_value()),
        SortKey::Age => a.respondent.age_sort_value().cmp(&b.respondent.age_sort_value()),
    }
}

/// Returns the responses ordered by the given key and direction.
///
/// The sort is stable: responses with equal keys keep their relative input
/// order, in both directions. No secondary tie-break key is applied.
pub fn sort_responses(responses: &[Response], key: SortKey, direction: SortDirection) -> Vec<Response> {
    let mut sorted = responses.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Order-preserving counter filter.
pub fn filter_by_counter(responses: &[Response], counter: CounterId) -> Vec<Response> {
    responses
        .iter()
        .filter(|r| r.counter_id == counter)
        .cloned()
        .collect()
}

/// Sort state tracked independently per counter view and for the
/// all-responses view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSorts {
    all_view: Option<SortState>,
    per_counter: HashMap<CounterId, SortState>,
}

impl ViewSorts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective sort of the all-responses view.
    pub fn all_state(&self) -> SortState {
        self.all_view.unwrap_or_default()
    }

    /// Effective sort of one counter view.
    pub fn counter_state(&self, counter: CounterId) -> SortState {
        self.per_counter
            .get(&counter)
            .copied()
            .unwrap_or_default()
    }

    /// Header click on the all-responses view.
    pub fn toggle_all(&mut self, key: SortKey) {
        self.all_view = Some(match self.all_view {
            Some(state) => state.toggled(key),
            None => SortState::new(key, SortDirection::Asc),
        });
    }

    /// Header click on one counter view. Other counters are unaffected.
    pub fn toggle_counter(&mut self, counter: CounterId, key: SortKey) {
        let next = match self.per_counter.get(&counter) {
            Some(state) => state.toggled(key),
            None => SortState::new(key, SortDirection::Asc),
        };
        self.per_counter.insert(counter, next);
    }
}
