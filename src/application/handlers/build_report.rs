//! BuildReportHandler - the exportable report.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::reporting::{build_report, SurveyReport};
use crate::domain::scheme::SurveyScheme;
use crate::ports::ResponseStore;

/// Handler producing the report that export adapters serialize verbatim.
pub struct BuildReportHandler {
    store: Arc<dyn ResponseStore>,
    scheme: Arc<SurveyScheme>,
}

impl BuildReportHandler {
    pub fn new(store: Arc<dyn ResponseStore>, scheme: Arc<SurveyScheme>) -> Self {
        Self { store, scheme }
    }

    pub async fn handle(&self) -> Result<SurveyReport, DomainError> {
        let responses = self.store.list_all().await?;
        Ok(build_report(&responses, &self.scheme, Timestamp::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CounterId, Rating, ResponseId};
    use crate::domain::response::{AnswerSet, NewResponse, Response};
    use crate::domain::scheme::Respondent;
    use crate::domain::scoring::RatingIndex;
    use async_trait::async_trait;

    struct StubStore {
        responses: Vec<Response>,
    }

    #[async_trait]
    impl ResponseStore for StubStore {
        async fn insert(&self, _submission: &NewResponse) -> Result<ResponseId, DomainError> {
            unimplemented!("not used in this test")
        }

        async fn list_all(&self) -> Result<Vec<Response>, DomainError> {
            Ok(self.responses.clone())
        }

        async fn delete_by_ids(&self, _ids: &[ResponseId]) -> Result<u64, DomainError> {
            Ok(0)
        }

        async fn delete_all(&self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn report_reflects_store_contents() {
        let scheme = SurveyScheme::standard();
        let answers: AnswerSet = scheme
            .question_ids()
            .map(|q| (q.clone(), Rating::VerySatisfied))
            .collect();
        let store = Arc::new(StubStore {
            responses: vec![Response {
                id: ResponseId::new(1),
                counter_id: CounterId::new(4),
                answers,
                rating_index: RatingIndex::from_stored(4.0),
                respondent: Respondent::empty(),
                submitted_at: Some(Timestamp::from_unix_secs(0)),
            }],
        });
        let handler = BuildReportHandler::new(store, Arc::new(scheme));

        let report = handler.handle().await.unwrap();
        assert_eq!(report.global.count, 1);
        assert_eq!(report.global.index.value(), 100.0);
        assert_eq!(report.respondents.len(), 1);
        assert_eq!(report.counters.len(), 23);
    }
}
