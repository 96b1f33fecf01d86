//! PostgreSQL implementation of ResponseStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::warn;

use crate::domain::foundation::{CounterId, DomainError, ErrorCode, ResponseId, Timestamp};
use crate::domain::response::{AnswerSet, NewResponse, Response};
use crate::domain::scheme::Respondent;
use crate::domain::scoring::RatingIndex;
use crate::ports::ResponseStore;

/// PostgreSQL implementation of ResponseStore.
#[derive(Clone)]
pub struct PostgresResponseStore {
    pool: PgPool,
}

impl PostgresResponseStore {
    /// Creates a new PostgresResponseStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseStore for PostgresResponseStore {
    async fn insert(&self, submission: &NewResponse) -> Result<ResponseId, DomainError> {
        let answers = serde_json::to_value(&submission.answers).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to encode answers: {}", e),
            )
        })?;
        let respondent = serde_json::to_value(&submission.respondent).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to encode respondent: {}", e),
            )
        })?;

        let row = sqlx::query(
            r#"
            INSERT INTO responses (counter_id, rating_index, answers, respondent)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(submission.counter_id.value() as i16)
        .bind(submission.rating_index.value())
        .bind(answers)
        .bind(respondent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert response: {}", e),
            )
        })?;

        Ok(ResponseId::new(row.get::<i64, _>("id")))
    }

    async fn list_all(&self) -> Result<Vec<Response>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, counter_id, rating_index, answers, respondent, submitted_at
            FROM responses
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch responses: {}", e),
            )
        })?;

        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            responses.push(row_to_response(row)?);
        }
        Ok(responses)
    }

    async fn delete_by_ids(&self, ids: &[ResponseId]) -> Result<u64, DomainError> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.value()).collect();
        let result = sqlx::query("DELETE FROM responses WHERE id = ANY($1)")
            .bind(&raw_ids)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete responses: {}", e),
                )
            })?;
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM responses")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete all responses: {}", e),
                )
            })?;
        Ok(())
    }
}

fn row_to_response(row: sqlx::postgres::PgRow) -> Result<Response, DomainError> {
    let id = ResponseId::new(row.get::<i64, _>("id"));

    // Stored JSON is tolerated when partially filled; a corrupt blob loses
    // its demographics/answers rather than the whole listing.
    let answers: AnswerSet = serde_json::from_value(row.get::<serde_json::Value, _>("answers"))
        .unwrap_or_else(|e| {
            warn!(%id, error = %e, "unreadable answers blob, treating as empty");
            AnswerSet::empty()
        });
    let respondent: Respondent =
        serde_json::from_value(row.get::<serde_json::Value, _>("respondent")).unwrap_or_else(|e| {
            warn!(%id, error = %e, "unreadable respondent blob, treating as empty");
            Respondent::empty()
        });

    Ok(Response {
        id,
        counter_id: CounterId::new(row.get::<i16, _>("counter_id").max(0) as u16),
        answers,
        rating_index: RatingIndex::from_stored(row.get::<f64, _>("rating_index")),
        respondent,
        submitted_at: Some(Timestamp::from_datetime(
            row.get::<DateTime<Utc>, _>("submitted_at"),
        )),
    })
}
