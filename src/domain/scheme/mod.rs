//! Survey scheme: counters, questions, demographic options, grading table.

mod demographics;
mod question;
#[allow(clippy::module_inception)]
mod scheme;

pub use demographics::{age_lower_bound, AgeBracketDef, Gender, Respondent};
pub use question::{QuestionDef, QuestionId};
pub use scheme::{CounterDef, SurveyScheme};
