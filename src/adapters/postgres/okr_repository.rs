//! PostgreSQL implementation of OkrRepository.
//!
//! Key results and progress snapshots are JSONB columns on the OKR row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, OkrId, Timestamp, UserId};
use crate::domain::okr::{Okr, OkrStatus};
use crate::ports::{OkrFilter, OkrRepository};

use super::{db_error, from_jsonb, to_jsonb};

/// PostgreSQL implementation of OkrRepository.
#[derive(Clone)]
pub struct PostgresOkrRepository {
    pool: PgPool,
}

impl PostgresOkrRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, objective, okr_type, status, parent_okr_id, assigned_to,
           created_by, key_results, progress_snapshots, created_at, updated_at
    FROM okrs
"#;

#[async_trait]
impl OkrRepository for PostgresOkrRepository {
    async fn save(&self, okr: &Okr) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO okrs (
                id, objective, okr_type, status, parent_okr_id, assigned_to,
                created_by, key_results, progress_snapshots, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(okr.id().as_uuid())
        .bind(okr.objective())
        .bind(okr.okr_type().as_str())
        .bind(okr.status().as_str())
        .bind(okr.parent_okr_id().map(|id| *id.as_uuid()))
        .bind(okr.assigned_to().as_uuid())
        .bind(okr.created_by().as_uuid())
        .bind(to_jsonb(&okr.key_results(), "key_results")?)
        .bind(to_jsonb(&okr.progress_snapshots(), "progress_snapshots")?)
        .bind(okr.created_at().as_datetime())
        .bind(okr.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert OKR", e))?;

        Ok(())
    }

    async fn update(&self, okr: &Okr) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE okrs SET
                objective = $2,
                status = $3,
                key_results = $4,
                progress_snapshots = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(okr.id().as_uuid())
        .bind(okr.objective())
        .bind(okr.status().as_str())
        .bind(to_jsonb(&okr.key_results(), "key_results")?)
        .bind(to_jsonb(&okr.progress_snapshots(), "progress_snapshots")?)
        .bind(okr.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update OKR", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::OkrNotFound,
                format!("OKR not found: {}", okr.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: OkrId) -> Result<Option<Okr>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch OKR", e))?;

        row.map(row_to_okr).transpose()
    }

    async fn list(
        &self,
        filter: OkrFilter,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Okr>, DomainError> {
        // Bind placeholders are fixed; unset filters match everything.
        let offset = (page.saturating_sub(1) as i64) * limit as i64;
        let rows = sqlx::query(&format!(
            r#"{}
            WHERE ($1::text IS NULL OR okr_type = $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::uuid IS NULL OR assigned_to = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
            SELECT_COLUMNS
        ))
        .bind(filter.okr_type.map(|t| t.as_str()))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.assigned_to.map(|u| *u.as_uuid()))
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list OKRs", e))?;

        rows.into_iter().map(row_to_okr).collect()
    }

    async fn find_active_for_user(&self, user_id: UserId) -> Result<Vec<Okr>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE assigned_to = $1 AND status = $2 ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .bind(OkrStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch active OKRs", e))?;

        rows.into_iter().map(row_to_okr).collect()
    }
}

fn row_to_okr(row: sqlx::postgres::PgRow) -> Result<Okr, DomainError> {
    let id: Uuid = row.get("id");
    let okr_type: String = row.get("okr_type");
    let status: String = row.get("status");
    let parent_okr_id: Option<Uuid> = row.get("parent_okr_id");
    let assigned_to: Uuid = row.get("assigned_to");
    let created_by: Uuid = row.get("created_by");
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");

    Ok(Okr::reconstitute(
        OkrId::from_uuid(id),
        row.get("objective"),
        okr_type.parse()?,
        status.parse()?,
        parent_okr_id.map(OkrId::from_uuid),
        UserId::from_uuid(assigned_to),
        UserId::from_uuid(created_by),
        from_jsonb(row.get("key_results"), "key_results")?,
        from_jsonb(row.get("progress_snapshots"), "progress_snapshots")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
