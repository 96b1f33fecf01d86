//! Wire DTOs for the survey action API.

use serde::{Deserialize, Serialize};

use crate::domain::response::AnswerSet;
use crate::domain::scheme::Respondent;

/// Envelope shared by every API response:
/// `{success, message, data}` with `data` null on failure.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEnvelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// The request body of the single API endpoint, dispatched on `action`.
#[derive(Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ApiRequest {
    #[serde(rename_all = "camelCase")]
    SaveVote {
        counter_id: u16,
        answers: AnswerSet,
        /// Kiosk-computed value; the server recomputes and stores its own.
        #[serde(default)]
        rating_index: Option<f64>,
        respondent: Respondent,
    },
    GetVotes,
    DeleteAllVotes,
    #[serde(rename_all = "camelCase")]
    DeleteVotesByIds { ids: Vec<i64> },
    #[serde(rename_all = "camelCase")]
    AdminLogin { pin: String },
}

/// Payload of a successful `deleteVotesByIds`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCountData {
    pub deleted_count: u64,
}

/// Payload of a successful `adminLogin`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginData {
    pub token: String,
    pub expires_in_secs: u64,
}
