//! PostgreSQL implementation of SubmissionRepository.
//!
//! The (cycle, reviewee, reviewer, review_type) tuple is backed by a unique
//! index; violations surface as DuplicateSubmission.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{
    CycleId, DomainError, ErrorCode, RatingValue, SubmissionId, Timestamp, UserId,
};
use crate::domain::review_submission::{ReviewSubmission, SubmissionKey};
use crate::ports::SubmissionRepository;

use super::{db_error, from_jsonb, to_jsonb};

/// PostgreSQL implementation of SubmissionRepository.
#[derive(Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, cycle_id, reviewee_id, reviewer_id, review_type, status,
           responses, overall_rating, strengths, areas_for_improvement, goals,
           comments, ai_suggestion, ai_score, submitted_at, created_at, updated_at
    FROM review_submissions
"#;

const UNIQUE_VIOLATION: &str = "23505";

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn save(&self, submission: &ReviewSubmission) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO review_submissions (
                id, cycle_id, reviewee_id, reviewer_id, review_type, status,
                responses, overall_rating, strengths, areas_for_improvement,
                goals, comments, ai_suggestion, ai_score, submitted_at,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                      $14, $15, $16, $17)
            "#,
        )
        .bind(submission.id().as_uuid())
        .bind(submission.cycle_id().as_uuid())
        .bind(submission.reviewee_id().as_uuid())
        .bind(submission.reviewer_id().as_uuid())
        .bind(submission.review_type().as_str())
        .bind(submission.status().as_str())
        .bind(to_jsonb(&submission.responses(), "responses")?)
        .bind(submission.overall_rating().map(|r| r.value() as i16))
        .bind(submission.strengths())
        .bind(submission.areas_for_improvement())
        .bind(submission.goals())
        .bind(submission.comments())
        .bind(
            submission
                .ai_suggestion()
                .map(|s| to_jsonb(s, "ai_suggestion"))
                .transpose()?,
        )
        .bind(
            submission
                .ai_score()
                .map(|s| to_jsonb(s, "ai_score"))
                .transpose()?,
        )
        .bind(submission.submitted_at().map(|t| *t.as_datetime()))
        .bind(submission.created_at().as_datetime())
        .bind(submission.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let is_duplicate = e
                .as_database_error()
                .and_then(|d| d.code())
                .map(|code| code == UNIQUE_VIOLATION)
                .unwrap_or(false);
            if is_duplicate {
                DomainError::new(
                    ErrorCode::DuplicateSubmission,
                    "A submission already exists for this cycle, reviewee, reviewer, and review type",
                )
            } else {
                db_error("insert submission", e)
            }
        })?;

        Ok(())
    }

    async fn update(&self, submission: &ReviewSubmission) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE review_submissions SET
                status = $2,
                responses = $3,
                overall_rating = $4,
                strengths = $5,
                areas_for_improvement = $6,
                goals = $7,
                comments = $8,
                ai_suggestion = $9,
                ai_score = $10,
                submitted_at = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(submission.id().as_uuid())
        .bind(submission.status().as_str())
        .bind(to_jsonb(&submission.responses(), "responses")?)
        .bind(submission.overall_rating().map(|r| r.value() as i16))
        .bind(submission.strengths())
        .bind(submission.areas_for_improvement())
        .bind(submission.goals())
        .bind(submission.comments())
        .bind(
            submission
                .ai_suggestion()
                .map(|s| to_jsonb(s, "ai_suggestion"))
                .transpose()?,
        )
        .bind(
            submission
                .ai_score()
                .map(|s| to_jsonb(s, "ai_score"))
                .transpose()?,
        )
        .bind(submission.submitted_at().map(|t| *t.as_datetime()))
        .bind(submission.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update submission", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SubmissionNotFound,
                format!("Submission not found: {}", submission.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: SubmissionId) -> Result<Option<ReviewSubmission>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch submission", e))?;

        row.map(row_to_submission).transpose()
    }

    async fn find_by_key(
        &self,
        key: &SubmissionKey,
    ) -> Result<Option<ReviewSubmission>, DomainError> {
        let row = sqlx::query(&format!(
            r#"{} WHERE cycle_id = $1 AND reviewee_id = $2
                 AND reviewer_id = $3 AND review_type = $4"#,
            SELECT_COLUMNS
        ))
        .bind(key.cycle_id.as_uuid())
        .bind(key.reviewee_id.as_uuid())
        .bind(key.reviewer_id.as_uuid())
        .bind(key.review_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch submission by key", e))?;

        row.map(row_to_submission).transpose()
    }

    async fn find_by_cycle(
        &self,
        cycle_id: CycleId,
    ) -> Result<Vec<ReviewSubmission>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE cycle_id = $1 ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(cycle_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch cycle submissions", e))?;

        rows.into_iter().map(row_to_submission).collect()
    }

    async fn find_by_reviewer(
        &self,
        cycle_id: CycleId,
        reviewer_id: UserId,
    ) -> Result<Vec<ReviewSubmission>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE cycle_id = $1 AND reviewer_id = $2 ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(cycle_id.as_uuid())
        .bind(reviewer_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch reviewer submissions", e))?;

        rows.into_iter().map(row_to_submission).collect()
    }

    async fn find_by_reviewee(
        &self,
        reviewee_id: UserId,
    ) -> Result<Vec<ReviewSubmission>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE reviewee_id = $1 ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(reviewee_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch reviewee submissions", e))?;

        rows.into_iter().map(row_to_submission).collect()
    }
}

fn row_to_submission(row: sqlx::postgres::PgRow) -> Result<ReviewSubmission, DomainError> {
    let id: Uuid = row.get("id");
    let cycle_id: Uuid = row.get("cycle_id");
    let reviewee_id: Uuid = row.get("reviewee_id");
    let reviewer_id: Uuid = row.get("reviewer_id");
    let review_type: String = row.get("review_type");
    let status: String = row.get("status");
    let overall_rating: Option<i16> = row.get("overall_rating");
    let ai_suggestion: Option<serde_json::Value> = row.get("ai_suggestion");
    let ai_score: Option<serde_json::Value> = row.get("ai_score");
    let submitted_at: Option<DateTime<Utc>> = row.get("submitted_at");
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");

    let key = SubmissionKey {
        cycle_id: CycleId::from_uuid(cycle_id),
        reviewee_id: UserId::from_uuid(reviewee_id),
        reviewer_id: UserId::from_uuid(reviewer_id),
        review_type: review_type.parse()?,
    };

    Ok(ReviewSubmission::reconstitute(
        SubmissionId::from_uuid(id),
        key,
        status.parse()?,
        from_jsonb(row.get("responses"), "responses")?,
        overall_rating
            .map(|r| RatingValue::new(r as u8))
            .transpose()?,
        row.get("strengths"),
        row.get("areas_for_improvement"),
        row.get("goals"),
        row.get("comments"),
        ai_suggestion
            .map(|v| from_jsonb(v, "ai_suggestion"))
            .transpose()?,
        ai_score.map(|v| from_jsonb(v, "ai_score")).transpose()?,
        submitted_at.map(Timestamp::from_datetime),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
