//! Aggregation engine: summaries, answer tallies, and the assembled report.

mod question_tally;
mod report;
mod summary;

pub use question_tally::{tally_answers, QuestionTallies, RatingTally};
pub use report::{build_report, CounterReportRow, RespondentDetailRow, SurveyReport};
pub use summary::{aggregate_by_counter, aggregate_global, CounterSummary, GlobalSummary};
