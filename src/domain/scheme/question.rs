//! Survey question definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Rating;

/// Identifier of a survey question, one of the fixed keys of the scheme
/// (`u1`..`u9` in the standard instrument).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a QuestionId from a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// One survey question: identifier, prompt, and the four ordinal labels
/// attached to the rating scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDef {
    pub id: QuestionId,
    pub prompt: String,
    /// Labels for ratings 1..4, in ascending order.
    #[serde(rename = "labels")]
    pub scale_labels: [String; 4],
}

impl QuestionDef {
    /// Creates a question definition.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        scale_labels: [&str; 4],
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.into(),
            scale_labels: scale_labels.map(|s| s.to_string()),
        }
    }

    /// Returns the ordinal label for a rating on this question's scale.
    pub fn label_for(&self, rating: Rating) -> &str {
        &self.scale_labels[(rating.value() - 1) as usize]
    }
}
