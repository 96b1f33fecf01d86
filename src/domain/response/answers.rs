//! The answer set of one survey submission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Rating, ValidationError};
use crate::domain::scheme::{QuestionDef, QuestionId};

/// Mapping from question id to the chosen rating.
///
/// A submission must answer every configured question; rows read back from
/// the store are tolerated with answers absent and the tallies simply skip
/// the holes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, Rating>);

impl AnswerSet {
    /// An empty answer set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Records the answer for a question, replacing any earlier choice.
    pub fn set(&mut self, question: QuestionId, rating: Rating) {
        self.0.insert(question, rating);
    }

    /// Returns a copy with the given answer recorded.
    pub fn with(&self, question: QuestionId, rating: Rating) -> Self {
        let mut next = self.clone();
        next.set(question, rating);
        next
    }

    /// The rating chosen for a question, if answered.
    pub fn get(&self, question: &QuestionId) -> Option<Rating> {
        self.0.get(question).copied()
    }

    /// Removes an answer. Mostly useful in tests.
    pub fn remove(&mut self, question: &QuestionId) -> Option<Rating> {
        self.0.remove(question)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over answered questions.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, Rating)> {
        self.0.iter().map(|(id, rating)| (id, *rating))
    }

    /// Verifies that every configured question has an answer.
    pub fn validate_complete(&self, questions: &[QuestionDef]) -> Result<(), ValidationError> {
        for question in questions {
            if !self.0.contains_key(&question.id) {
                return Err(ValidationError::missing_answer(question.id.as_str()));
            }
        }
        Ok(())
    }
}

impl FromIterator<(QuestionId, Rating)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Rating)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
