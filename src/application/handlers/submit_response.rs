//! SubmitResponseHandler - accepts one kiosk survey submission.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{CounterId, DomainError, ErrorCode, ResponseId};
use crate::domain::response::{AnswerSet, NewResponse};
use crate::domain::scheme::{Respondent, SurveyScheme};
use crate::domain::scoring::RatingIndex;
use crate::ports::ResponseStore;

/// Command carrying one submission.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub counter_id: CounterId,
    pub answers: AnswerSet,
    pub respondent: Respondent,
    /// Rating index as computed by the kiosk. Informational only; the
    /// stored value is always recomputed here so the derived-field
    /// invariant cannot be broken by a client.
    pub client_rating_index: Option<f64>,
}

/// Result of a stored submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub id: ResponseId,
}

/// Handler validating and persisting survey submissions.
pub struct SubmitResponseHandler {
    store: Arc<dyn ResponseStore>,
    scheme: Arc<SurveyScheme>,
}

impl SubmitResponseHandler {
    pub fn new(store: Arc<dyn ResponseStore>, scheme: Arc<SurveyScheme>) -> Self {
        Self { store, scheme }
    }

    pub async fn handle(&self, cmd: SubmitResponseCommand) -> Result<SubmitReceipt, DomainError> {
        // Everything is validated before the store sees the submission.
        if !self.scheme.contains_counter(cmd.counter_id) {
            return Err(DomainError::new(
                ErrorCode::CounterOutOfRange,
                format!(
                    "Counter {} is outside the configured range 1..{}",
                    cmd.counter_id,
                    self.scheme.counter_count()
                ),
            ));
        }
        self.scheme.validate_respondent(&cmd.respondent)?;

        let rating_index = RatingIndex::compute(&cmd.answers, &self.scheme.questions)?;
        if let Some(client_value) = cmd.client_rating_index {
            if (client_value - rating_index.value()).abs() > 1e-9 {
                warn!(
                    client_value,
                    computed = rating_index.value(),
                    "client-sent rating index differs from recomputed value; storing recomputed"
                );
            }
        }

        let submission = NewResponse {
            counter_id: cmd.counter_id,
            answers: cmd.answers,
            rating_index,
            respondent: cmd.respondent,
        };
        let id = self.store.insert(&submission).await?;
        info!(%id, counter = %submission.counter_id, "survey response stored");
        Ok(SubmitReceipt { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Rating;
    use crate::domain::response::Response;
    use crate::domain::scheme::Gender;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockResponseStore {
        inserted: Mutex<Vec<NewResponse>>,
        fail_insert: bool,
    }

    impl MockResponseStore {
        fn new() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                fail_insert: false,
            }
        }

        fn failing() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                fail_insert: true,
            }
        }

        fn inserted(&self) -> Vec<NewResponse> {
            self.inserted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResponseStore for MockResponseStore {
        async fn insert(&self, submission: &NewResponse) -> Result<ResponseId, DomainError> {
            if self.fail_insert {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated insert failure",
                ));
            }
            let mut inserted = self.inserted.lock().unwrap();
            inserted.push(submission.clone());
            Ok(ResponseId::new(inserted.len() as i64))
        }

        async fn list_all(&self) -> Result<Vec<Response>, DomainError> {
            Ok(vec![])
        }

        async fn delete_by_ids(&self, _ids: &[ResponseId]) -> Result<u64, DomainError> {
            Ok(0)
        }

        async fn delete_all(&self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn scheme() -> Arc<SurveyScheme> {
        Arc::new(SurveyScheme::standard())
    }

    fn complete_answers(scheme: &SurveyScheme, rating: Rating) -> AnswerSet {
        scheme
            .question_ids()
            .map(|id| (id.clone(), rating))
            .collect()
    }

    fn complete_respondent() -> Respondent {
        Respondent {
            gender: Some(Gender::Female),
            education: Some("S1".to_string()),
            occupation: Some("Karyawan".to_string()),
            age_bracket: Some("25-34 Tahun".to_string()),
        }
    }

    fn valid_command(scheme: &SurveyScheme) -> SubmitResponseCommand {
        SubmitResponseCommand {
            counter_id: CounterId::new(3),
            answers: complete_answers(scheme, Rating::VerySatisfied),
            respondent: complete_respondent(),
            client_rating_index: None,
        }
    }

    #[tokio::test]
    async fn stores_valid_submission_with_recomputed_rating_index() {
        let scheme = scheme();
        let store = Arc::new(MockResponseStore::new());
        let handler = SubmitResponseHandler::new(store.clone(), scheme.clone());

        let receipt = handler.handle(valid_command(&scheme)).await.unwrap();
        assert_eq!(receipt.id, ResponseId::new(1));

        let inserted = store.inserted();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].rating_index.value(), 4.0);
    }

    #[tokio::test]
    async fn recomputes_rating_index_even_when_client_disagrees() {
        let scheme = scheme();
        let store = Arc::new(MockResponseStore::new());
        let handler = SubmitResponseHandler::new(store.clone(), scheme.clone());

        let mut cmd = valid_command(&scheme);
        cmd.client_rating_index = Some(1.5);
        handler.handle(cmd).await.unwrap();

        assert_eq!(store.inserted()[0].rating_index.value(), 4.0);
    }

    #[tokio::test]
    async fn rejects_out_of_range_counter_before_store() {
        let scheme = scheme();
        let store = Arc::new(MockResponseStore::new());
        let handler = SubmitResponseHandler::new(store.clone(), scheme.clone());

        let mut cmd = valid_command(&scheme);
        cmd.counter_id = CounterId::new(24);
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::CounterOutOfRange);
        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn rejects_incomplete_answers_before_store() {
        let scheme = scheme();
        let store = Arc::new(MockResponseStore::new());
        let handler = SubmitResponseHandler::new(store.clone(), scheme.clone());

        let mut cmd = valid_command(&scheme);
        cmd.answers.remove(&scheme.questions[8].id);
        let err = handler.handle(cmd).await.unwrap_err();

        assert!(err.message.contains("u9"));
        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn rejects_incomplete_demographics_before_store() {
        let scheme = scheme();
        let store = Arc::new(MockResponseStore::new());
        let handler = SubmitResponseHandler::new(store.clone(), scheme.clone());

        let mut cmd = valid_command(&scheme);
        cmd.respondent.occupation = None;
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(store.inserted().is_empty());
    }

    #[tokio::test]
    async fn surfaces_store_failure() {
        let scheme = scheme();
        let store = Arc::new(MockResponseStore::failing());
        let handler = SubmitResponseHandler::new(store, scheme.clone());

        let err = handler.handle(valid_command(&scheme)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn mean_of_mixed_answers_round_trips_exactly() {
        let scheme = scheme();
        let store = Arc::new(MockResponseStore::new());
        let handler = SubmitResponseHandler::new(store.clone(), scheme.clone());

        let values = [1u8, 2, 3, 4, 1, 2, 3, 4, 1];
        let answers: AnswerSet = scheme
            .question_ids()
            .zip(values)
            .map(|(id, v)| (id.clone(), Rating::try_from_u8(v).unwrap()))
            .collect();
        let cmd = SubmitResponseCommand {
            counter_id: CounterId::new(1),
            answers,
            respondent: complete_respondent(),
            client_rating_index: None,
        };
        handler.handle(cmd).await.unwrap();

        let stored = &store.inserted()[0];
        assert!((stored.rating_index.value() - 21.0 / 9.0).abs() < 1e-12);
    }
}
