//! PostgreSQL implementation of TimeEntryRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, OkrId, TimeEntryId, Timestamp, UserId};
use crate::domain::time_entry::TimeEntry;
use crate::ports::TimeEntryRepository;

use super::db_error;

/// PostgreSQL implementation of TimeEntryRepository.
#[derive(Clone)]
pub struct PostgresTimeEntryRepository {
    pool: PgPool,
}

impl PostgresTimeEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimeEntryRepository for PostgresTimeEntryRepository {
    async fn save(&self, entry: &TimeEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO time_entries (
                id, user_id, okr_id, date, hours, category, note, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.user_id().as_uuid())
        .bind(entry.okr_id().map(|id| *id.as_uuid()))
        .bind(entry.date())
        .bind(entry.hours())
        .bind(entry.category().as_str())
        .bind(entry.note())
        .bind(entry.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert time entry", e))?;

        Ok(())
    }

    async fn find_for_user(
        &self,
        user_id: UserId,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<TimeEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, okr_id, date, hours, category, note, created_at
            FROM time_entries
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch time entries", e))?;

        rows.into_iter().map(row_to_entry).collect()
    }
}

fn row_to_entry(row: sqlx::postgres::PgRow) -> Result<TimeEntry, DomainError> {
    let id: Uuid = row.get("id");
    let user_id: Uuid = row.get("user_id");
    let okr_id: Option<Uuid> = row.get("okr_id");
    let category: String = row.get("category");
    let created_at: DateTime<Utc> = row.get("created_at");

    Ok(TimeEntry::reconstitute(
        TimeEntryId::from_uuid(id),
        UserId::from_uuid(user_id),
        okr_id.map(OkrId::from_uuid),
        row.get("date"),
        row.get("hours"),
        category.parse()?,
        row.get("note"),
        Timestamp::from_datetime(created_at),
    ))
}
