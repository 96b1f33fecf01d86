//! DeleteResponsesHandler - bulk deletion by id set or of everything.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ResponseId, ValidationError};
use crate::ports::ResponseStore;

/// Result of a bulk delete by id set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionResult {
    pub deleted_count: u64,
}

/// Handler for the two deletion operations of the domain.
pub struct DeleteResponsesHandler {
    store: Arc<dyn ResponseStore>,
}

impl DeleteResponsesHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self { store }
    }

    /// Deletes exactly the given ids. An empty batch is rejected before any
    /// store request is made.
    pub async fn delete_by_ids(&self, ids: &[ResponseId]) -> Result<DeletionResult, DomainError> {
        if ids.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        let deleted_count = self.store.delete_by_ids(ids).await?;
        info!(deleted_count, "responses deleted by id batch");
        Ok(DeletionResult { deleted_count })
    }

    /// Deletes every stored response.
    pub async fn delete_all(&self) -> Result<(), DomainError> {
        self.store.delete_all().await?;
        info!("all responses deleted");
        Ok(())
    }
}
