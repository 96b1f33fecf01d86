//! Raw answer-frequency tables per counter and question.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::{CounterId, Rating};
use crate::domain::response::Response;
use crate::domain::scheme::{QuestionId, SurveyScheme};

/// Frequency of each rating value for one counter × question cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RatingTally {
    /// Occurrence counts indexed by rating value - 1.
    counts: [u32; 4],
}

impl RatingTally {
    /// Records one answer.
    pub fn add(&mut self, rating: Rating) {
        self.counts[(rating.value() - 1) as usize] += 1;
    }

    /// Number of respondents who chose the given rating.
    pub fn count_of(&self, rating: Rating) -> u32 {
        self.counts[(rating.value() - 1) as usize]
    }

    /// Number of respondents who answered this question at this counter.
    pub fn respondents(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Sum of the raw answer values across respondents.
    ///
    /// This is the figure the detail table's total ("Jumlah") row reports.
    /// It is a value sum, not a respondent count; the behavior is kept
    /// literally even though it reads like a display quirk.
    /// TODO(product): confirm whether the total row should really sum
    /// answer values rather than count respondents.
    pub fn value_sum(&self) -> u32 {
        Rating::ALL
            .iter()
            .map(|r| self.count_of(*r) * r.value() as u32)
            .sum()
    }
}

/// Answer tallies for every configured counter × question cell.
///
/// Cells exist for all configured combinations even when no response touched
/// them, so tabular rendering never has holes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionTallies {
    by_counter: BTreeMap<CounterId, BTreeMap<QuestionId, RatingTally>>,
}

impl QuestionTallies {
    /// The tally for one cell. `None` only for unconfigured ids.
    pub fn get(&self, counter: CounterId, question: &QuestionId) -> Option<&RatingTally> {
        self.by_counter.get(&counter).and_then(|m| m.get(question))
    }

    /// Iterates counters in ascending order.
    pub fn counters(&self) -> impl Iterator<Item = (&CounterId, &BTreeMap<QuestionId, RatingTally>)> {
        self.by_counter.iter()
    }
}

/// Builds the per-counter per-question rating tallies.
///
/// A response missing the answer for one question is excluded from that
/// question's tally only, not from the others. Responses at unconfigured
/// counters are ignored entirely.
pub fn tally_answers(responses: &[Response], scheme: &SurveyScheme) -> QuestionTallies {
    let mut by_counter: BTreeMap<CounterId, BTreeMap<QuestionId, RatingTally>> = scheme
        .counter_ids()
        .map(|counter| {
            let cells = scheme
                .question_ids()
                .map(|q| (q.clone(), RatingTally::default()))
                .collect();
            (counter, cells)
        })
        .collect();

    for response in responses {
        let Some(cells) = by_counter.get_mut(&response.counter_id) else {
            continue;
        };
        for question in scheme.question_ids() {
            if let Some(rating) = response.answers.get(question) {
                if let Some(tally) = cells.get_mut(question) {
                    tally.add(rating);
                }
            }
        }
    }

    QuestionTallies { by_counter }
}
