//! ListResponsesHandler - the full response collection for the dashboard.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::response::Response;
use crate::ports::ResponseStore;

/// Handler returning every stored response, newest first.
pub struct ListResponsesHandler {
    store: Arc<dyn ResponseStore>,
}

impl ListResponsesHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Response>, DomainError> {
        self.store.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CounterId, ErrorCode, ResponseId, Timestamp};
    use crate::domain::response::{AnswerSet, NewResponse};
    use crate::domain::scheme::Respondent;
    use crate::domain::scoring::RatingIndex;
    use async_trait::async_trait;

    struct StubStore {
        responses: Vec<Response>,
        fail: bool,
    }

    #[async_trait]
    impl ResponseStore for StubStore {
        async fn insert(&self, _submission: &NewResponse) -> Result<ResponseId, DomainError> {
            unimplemented!("not used in this test")
        }

        async fn list_all(&self) -> Result<Vec<Response>, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "query failed"));
            }
            Ok(self.responses.clone())
        }

        async fn delete_by_ids(&self, _ids: &[ResponseId]) -> Result<u64, DomainError> {
            Ok(0)
        }

        async fn delete_all(&self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn response(id: i64) -> Response {
        Response {
            id: ResponseId::new(id),
            counter_id: CounterId::new(1),
            answers: AnswerSet::empty(),
            rating_index: RatingIndex::from_stored(3.0),
            respondent: Respondent::empty(),
            submitted_at: Some(Timestamp::from_unix_secs(id as u64)),
        }
    }

    #[tokio::test]
    async fn passes_store_collection_through() {
        let store = Arc::new(StubStore {
            responses: vec![response(2), response(1)],
            fail: false,
        });
        let handler = ListResponsesHandler::new(store);
        let responses = handler.handle().await.unwrap();
        let ids: Vec<i64> = responses.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn surfaces_store_failure() {
        let store = Arc::new(StubStore {
            responses: vec![],
            fail: true,
        });
        let handler = ListResponsesHandler::new(store);
        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
