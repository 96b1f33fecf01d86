//! The assembled survey report fed to presentation and export.
//!
//! Export formats serialize exactly what this module produced; they never
//! recompute scoring, so dashboard and exported figures cannot diverge.

use serde::Serialize;

use crate::domain::foundation::{CounterId, Timestamp};
use crate::domain::response::Response;
use crate::domain::scheme::SurveyScheme;
use crate::domain::scoring::NO_GRADE;

use super::question_tally::{tally_answers, QuestionTallies};
use super::summary::{aggregate_by_counter, aggregate_global, CounterSummary, GlobalSummary};

/// Per-counter line of the report, with the agency name resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterReportRow {
    pub counter_name: String,
    #[serde(flatten)]
    pub summary: CounterSummary,
}

/// One respondent line of the detail section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentDetailRow {
    pub number: usize,
    pub submitted_at: Option<Timestamp>,
    pub counter_id: CounterId,
    pub counter_name: String,
    pub gender: String,
    pub education: String,
    pub occupation: String,
    pub age_bracket: String,
    /// Answer values in instrument order; holes for unanswered questions.
    pub answers: Vec<Option<u8>>,
    /// The response's own satisfaction index.
    pub satisfaction: f64,
}

/// Complete report: overall statistics, per-counter summaries, answer
/// tallies, and the respondent detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyReport {
    pub generated_at: Timestamp,
    pub global: GlobalSummary,
    pub counters: Vec<CounterReportRow>,
    #[serde(skip)]
    pub tallies: QuestionTallies,
    pub question_columns: Vec<String>,
    pub respondents: Vec<RespondentDetailRow>,
}

/// Builds the full report from the response collection.
///
/// Detail rows keep the input order (the store lists newest first).
pub fn build_report(
    responses: &[Response],
    scheme: &SurveyScheme,
    generated_at: Timestamp,
) -> SurveyReport {
    let global = aggregate_global(responses, &scheme.grading);
    let counters = aggregate_by_counter(responses, scheme)
        .into_iter()
        .map(|summary| CounterReportRow {
            counter_name: scheme.counter_display_name(summary.counter_id),
            summary,
        })
        .collect();

    let respondents = responses
        .iter()
        .enumerate()
        .map(|(idx, response)| {
            let respondent = &response.respondent;
            RespondentDetailRow {
                number: idx + 1,
                submitted_at: response.submitted_at,
                counter_id: response.counter_id,
                counter_name: scheme.counter_display_name(response.counter_id),
                gender: respondent
                    .gender
                    .map(|g| g.label().to_string())
                    .unwrap_or_else(|| NO_GRADE.to_string()),
                education: respondent
                    .education
                    .clone()
                    .unwrap_or_else(|| NO_GRADE.to_string()),
                occupation: respondent
                    .occupation
                    .clone()
                    .unwrap_or_else(|| NO_GRADE.to_string()),
                age_bracket: respondent
                    .age_bracket
                    .clone()
                    .unwrap_or_else(|| NO_GRADE.to_string()),
                answers: scheme
                    .question_ids()
                    .map(|q| response.answers.get(q).map(|r| r.value()))
                    .collect(),
                satisfaction: response.satisfaction_index().value(),
            }
        })
        .collect();

    SurveyReport {
        generated_at,
        global,
        counters,
        tallies: tally_answers(responses, scheme),
        question_columns: scheme
            .question_ids()
            .map(|q| q.as_str().to_uppercase())
            .collect(),
        respondents,
    }
}
