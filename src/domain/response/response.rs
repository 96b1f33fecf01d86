//! The survey response entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CounterId, ResponseId, Timestamp};
use crate::domain::scheme::Respondent;
use crate::domain::scoring::{RatingIndex, SatisfactionIndex};

use super::AnswerSet;

/// One submitted survey response.
///
/// Created exactly once, fully populated; immutable afterwards except for
/// deletion. There is no update operation in the domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    pub counter_id: CounterId,
    pub answers: AnswerSet,
    pub rating_index: RatingIndex,
    pub respondent: Respondent,
    /// Assigned by the store at insert time; tolerated absent on old rows.
    #[serde(default)]
    pub submitted_at: Option<Timestamp>,
}

impl Response {
    /// The satisfaction index of this single response.
    pub fn satisfaction_index(&self) -> SatisfactionIndex {
        SatisfactionIndex::of_single(self.rating_index)
    }

    /// Ordering value for date sorts; missing timestamps sort as the epoch.
    pub fn submitted_at_or_epoch(&self) -> Timestamp {
        self.submitted_at.unwrap_or_else(Timestamp::epoch)
    }
}

/// A validated submission that has not been persisted yet. The store assigns
/// the id and the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResponse {
    pub counter_id: CounterId,
    pub answers: AnswerSet,
    pub rating_index: RatingIndex,
    pub respondent: Respondent,
}

impl NewResponse {
    /// Promotes the submission into a stored response.
    pub fn into_response(self, id: ResponseId, submitted_at: Timestamp) -> Response {
        Response {
            id,
            counter_id: self.counter_id,
            answers: self.answers,
            rating_index: self.rating_index,
            respondent: self.respondent,
            submitted_at: Some(submitted_at),
        }
    }
}
