//! PostgreSQL implementation of FeedbackRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::feedback::Feedback;
use crate::domain::foundation::{
    DomainError, ErrorCode, FeedbackId, RatingValue, Timestamp, UserId,
};
use crate::ports::{FeedbackFilter, FeedbackRepository};

use super::{db_error, from_jsonb, to_jsonb};

/// PostgreSQL implementation of FeedbackRepository.
#[derive(Clone)]
pub struct PostgresFeedbackRepository {
    pool: PgPool,
}

impl PostgresFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, from_user, to_user, content, rating, category, tags,
           sentiment, moderation_status, created_at
    FROM feedback
"#;

#[async_trait]
impl FeedbackRepository for PostgresFeedbackRepository {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO feedback (
                id, from_user, to_user, content, rating, category, tags,
                sentiment, moderation_status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(feedback.id().as_uuid())
        .bind(feedback.from_user().as_uuid())
        .bind(feedback.to_user().as_uuid())
        .bind(feedback.content())
        .bind(feedback.rating().map(|r| r.value() as i16))
        .bind(feedback.category())
        .bind(to_jsonb(&feedback.tags(), "tags")?)
        .bind(feedback.sentiment().as_str())
        .bind(feedback.moderation_status().as_str())
        .bind(feedback.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert feedback", e))?;

        Ok(())
    }

    async fn update(&self, feedback: &Feedback) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE feedback SET
                sentiment = $2,
                moderation_status = $3
            WHERE id = $1
            "#,
        )
        .bind(feedback.id().as_uuid())
        .bind(feedback.sentiment().as_str())
        .bind(feedback.moderation_status().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update feedback", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::FeedbackNotFound,
                format!("Feedback not found: {}", feedback.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: FeedbackId) -> Result<Option<Feedback>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch feedback", e))?;

        row.map(row_to_feedback).transpose()
    }

    async fn list(
        &self,
        filter: FeedbackFilter,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Feedback>, DomainError> {
        let offset = (page.saturating_sub(1) as i64) * limit as i64;
        let rows = sqlx::query(&format!(
            r#"{}
            WHERE ($1::uuid IS NULL OR to_user = $1)
              AND ($2::uuid IS NULL OR from_user = $2)
              AND ($3::text IS NULL OR moderation_status = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
            SELECT_COLUMNS
        ))
        .bind(filter.to_user.map(|u| *u.as_uuid()))
        .bind(filter.from_user.map(|u| *u.as_uuid()))
        .bind(filter.moderation_status.map(|s| s.as_str()))
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list feedback", e))?;

        rows.into_iter().map(row_to_feedback).collect()
    }

    async fn find_rated_since(
        &self,
        to_user: UserId,
        since: Timestamp,
    ) -> Result<Vec<Feedback>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"{}
            WHERE to_user = $1 AND rating IS NOT NULL AND created_at >= $2
            ORDER BY created_at DESC
            "#,
            SELECT_COLUMNS
        ))
        .bind(to_user.as_uuid())
        .bind(since.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch rated feedback", e))?;

        rows.into_iter().map(row_to_feedback).collect()
    }
}

fn row_to_feedback(row: sqlx::postgres::PgRow) -> Result<Feedback, DomainError> {
    let id: Uuid = row.get("id");
    let from_user: Uuid = row.get("from_user");
    let to_user: Uuid = row.get("to_user");
    let rating: Option<i16> = row.get("rating");
    let sentiment: String = row.get("sentiment");
    let moderation_status: String = row.get("moderation_status");
    let created_at: DateTime<Utc> = row.get("created_at");

    Ok(Feedback::reconstitute(
        FeedbackId::from_uuid(id),
        UserId::from_uuid(from_user),
        UserId::from_uuid(to_user),
        row.get("content"),
        rating.map(|r| RatingValue::new(r as u8)).transpose()?,
        row.get("category"),
        from_jsonb(row.get("tags"), "tags")?,
        sentiment.parse()?,
        moderation_status.parse()?,
        Timestamp::from_datetime(created_at),
    ))
}
