//! Response store port.
//!
//! The durable table of submitted responses. The engines treat it as a black
//! box: insert, list-all, delete-by-id-set, delete-all. There is no update
//! operation; responses are immutable once stored.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ResponseId};
use crate::domain::response::{NewResponse, Response};

/// Port for response persistence.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Persists a validated submission. The store assigns the id and the
    /// submission timestamp.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, submission: &NewResponse) -> Result<ResponseId, DomainError>;

    /// The full unfiltered collection, newest first by submission time.
    async fn list_all(&self) -> Result<Vec<Response>, DomainError>;

    /// Deletes exactly the given ids, returning how many rows went away.
    /// Unknown ids are skipped, not errors.
    async fn delete_by_ids(&self, ids: &[ResponseId]) -> Result<u64, DomainError>;

    /// Deletes every stored response.
    async fn delete_all(&self) -> Result<(), DomainError>;
}
