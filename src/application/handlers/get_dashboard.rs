//! GetDashboardHandler - aggregated statistics for the admin dashboard.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{CounterId, DomainError, Rating};
use crate::domain::reporting::{aggregate_by_counter, aggregate_global, tally_answers, GlobalSummary};
use crate::domain::scheme::SurveyScheme;
use crate::ports::ResponseStore;

/// One counter line of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounter {
    pub counter_id: CounterId,
    pub counter_name: String,
    pub count: usize,
    pub index: f64,
    pub index_display: String,
    pub grade_display: String,
}

/// One counter × question tally cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTallyCell {
    pub question_id: String,
    /// Occurrences of each rating 1..4.
    pub counts: [u32; 4],
    pub respondents: u32,
    /// The detail table's total row: sum of raw answer values.
    pub value_sum: u32,
}

/// Tally row for one counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTallyRow {
    pub counter_id: CounterId,
    pub cells: Vec<DashboardTallyCell>,
}

/// Everything the dashboard renders, in one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub global: GlobalSummary,
    pub global_index_display: String,
    pub global_grade_display: String,
    pub counters: Vec<DashboardCounter>,
    pub tallies: Vec<DashboardTallyRow>,
}

/// Handler assembling the dashboard payload from the aggregation engine.
pub struct GetDashboardHandler {
    store: Arc<dyn ResponseStore>,
    scheme: Arc<SurveyScheme>,
}

impl GetDashboardHandler {
    pub fn new(store: Arc<dyn ResponseStore>, scheme: Arc<SurveyScheme>) -> Self {
        Self { store, scheme }
    }

    pub async fn handle(&self) -> Result<DashboardReport, DomainError> {
        let responses = self.store.list_all().await?;
        let scheme = &self.scheme;

        let global = aggregate_global(&responses, &scheme.grading);
        let counters = aggregate_by_counter(&responses, scheme)
            .into_iter()
            .map(|summary| DashboardCounter {
                counter_name: scheme.counter_display_name(summary.counter_id),
                count: summary.count,
                index: summary.index.value(),
                index_display: summary.index_display(),
                grade_display: summary.grade_display(),
                counter_id: summary.counter_id,
            })
            .collect();

        let tallies = tally_answers(&responses, scheme);
        let tally_rows = scheme
            .counter_ids()
            .map(|counter_id| DashboardTallyRow {
                counter_id,
                cells: scheme
                    .question_ids()
                    .map(|question| {
                        let tally = tallies
                            .get(counter_id, question)
                            .copied()
                            .unwrap_or_default();
                        DashboardTallyCell {
                            question_id: question.as_str().to_string(),
                            counts: [
                                tally.count_of(Rating::VeryDissatisfied),
                                tally.count_of(Rating::Dissatisfied),
                                tally.count_of(Rating::Satisfied),
                                tally.count_of(Rating::VerySatisfied),
                            ],
                            respondents: tally.respondents(),
                            value_sum: tally.value_sum(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Ok(DashboardReport {
            global_index_display: global.index_display(),
            global_grade_display: global.grade_display(),
            global,
            counters,
            tallies: tally_rows,
        })
    }
}
