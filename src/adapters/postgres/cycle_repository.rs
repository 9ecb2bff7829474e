//! PostgreSQL implementation of CycleRepository.
//!
//! Participants, questions, and settings live as JSONB on the cycle row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{CycleId, DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::review_cycle::{CycleStatus, ReviewCycle};
use crate::ports::CycleRepository;

use super::{db_error, from_jsonb, to_jsonb};

/// PostgreSQL implementation of CycleRepository.
#[derive(Clone)]
pub struct PostgresCycleRepository {
    pool: PgPool,
}

impl PostgresCycleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, cycle_type, status, start_date, end_date, is_emergency,
           settings, participants, questions, created_by, created_at, updated_at
    FROM review_cycles
"#;

#[async_trait]
impl CycleRepository for PostgresCycleRepository {
    async fn save(&self, cycle: &ReviewCycle) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO review_cycles (
                id, name, cycle_type, status, start_date, end_date, is_emergency,
                settings, participants, questions, created_by, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(cycle.id().as_uuid())
        .bind(cycle.name())
        .bind(cycle.cycle_type().as_str())
        .bind(cycle.status().as_str())
        .bind(cycle.start_date().as_datetime())
        .bind(cycle.end_date().as_datetime())
        .bind(cycle.is_emergency())
        .bind(to_jsonb(cycle.settings(), "settings")?)
        .bind(to_jsonb(&cycle.participants(), "participants")?)
        .bind(to_jsonb(&cycle.questions(), "questions")?)
        .bind(cycle.created_by().as_uuid())
        .bind(cycle.created_at().as_datetime())
        .bind(cycle.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert review cycle", e))?;

        Ok(())
    }

    async fn update(&self, cycle: &ReviewCycle) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE review_cycles SET
                name = $2,
                status = $3,
                start_date = $4,
                end_date = $5,
                settings = $6,
                participants = $7,
                questions = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(cycle.id().as_uuid())
        .bind(cycle.name())
        .bind(cycle.status().as_str())
        .bind(cycle.start_date().as_datetime())
        .bind(cycle.end_date().as_datetime())
        .bind(to_jsonb(cycle.settings(), "settings")?)
        .bind(to_jsonb(&cycle.participants(), "participants")?)
        .bind(to_jsonb(&cycle.questions(), "questions")?)
        .bind(cycle.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update review cycle", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CycleNotFound,
                format!("Review cycle not found: {}", cycle.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: CycleId) -> Result<Option<ReviewCycle>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch review cycle", e))?;

        row.map(row_to_cycle).transpose()
    }

    async fn list(
        &self,
        status: Option<CycleStatus>,
        page: u32,
        limit: u32,
    ) -> Result<Vec<ReviewCycle>, DomainError> {
        let offset = (page.saturating_sub(1) as i64) * limit as i64;
        let rows = match status {
            Some(status) => {
                sqlx::query(&format!(
                    "{} WHERE status = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                    SELECT_COLUMNS
                ))
                .bind(status.as_str())
                .bind(limit as i64)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(&format!(
                    "{} ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                    SELECT_COLUMNS
                ))
                .bind(limit as i64)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| db_error("list review cycles", e))?;

        rows.into_iter().map(row_to_cycle).collect()
    }

    async fn find_by_status(&self, status: CycleStatus) -> Result<Vec<ReviewCycle>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE status = $1 ORDER BY end_date ASC",
            SELECT_COLUMNS
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch cycles by status", e))?;

        rows.into_iter().map(row_to_cycle).collect()
    }
}

fn row_to_cycle(row: sqlx::postgres::PgRow) -> Result<ReviewCycle, DomainError> {
    let id: Uuid = row.get("id");
    let cycle_type: String = row.get("cycle_type");
    let status: String = row.get("status");
    let start_date: DateTime<Utc> = row.get("start_date");
    let end_date: DateTime<Utc> = row.get("end_date");
    let created_by: Uuid = row.get("created_by");
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");

    Ok(ReviewCycle::reconstitute(
        CycleId::from_uuid(id),
        row.get("name"),
        cycle_type.parse()?,
        status.parse()?,
        Timestamp::from_datetime(start_date),
        Timestamp::from_datetime(end_date),
        row.get("is_emergency"),
        from_jsonb(row.get("settings"), "settings")?,
        from_jsonb(row.get("participants"), "participants")?,
        from_jsonb(row.get("questions"), "questions")?,
        UserId::from_uuid(created_by),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
