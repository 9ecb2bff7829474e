//! PostgreSQL implementation of NotificationRepository.
//!
//! The scheduler's dedupe guard matches on the cycle_id key inside the
//! metadata JSONB column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{
    CycleId, DomainError, ErrorCode, NotificationId, Timestamp, UserId,
};
use crate::domain::notification::{Notification, NotificationKind};
use crate::ports::NotificationRepository;

use super::{db_error, from_jsonb, to_jsonb};

/// PostgreSQL implementation of NotificationRepository.
#[derive(Clone)]
pub struct PostgresNotificationRepository {
    pool: PgPool,
}

impl PostgresNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, kind, title, message, priority, read, scheduled_for,
           sent_at, email_sent, metadata, created_at
    FROM notifications
"#;

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn save(&self, notification: &Notification) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (
                id, user_id, kind, title, message, priority, read,
                scheduled_for, sent_at, email_sent, metadata, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(notification.id().as_uuid())
        .bind(notification.user_id().as_uuid())
        .bind(notification.kind().as_str())
        .bind(notification.title())
        .bind(notification.message())
        .bind(notification.priority().as_str())
        .bind(notification.is_read())
        .bind(notification.scheduled_for().map(|t| *t.as_datetime()))
        .bind(notification.sent_at().map(|t| *t.as_datetime()))
        .bind(notification.email_sent())
        .bind(to_jsonb(notification.metadata(), "metadata")?)
        .bind(notification.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert notification", e))?;

        Ok(())
    }

    async fn update(&self, notification: &Notification) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET
                read = $2,
                sent_at = $3,
                email_sent = $4
            WHERE id = $1
            "#,
        )
        .bind(notification.id().as_uuid())
        .bind(notification.is_read())
        .bind(notification.sent_at().map(|t| *t.as_datetime()))
        .bind(notification.email_sent())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update notification", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NotificationNotFound,
                format!("Notification not found: {}", notification.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: NotificationId,
    ) -> Result<Option<Notification>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch notification", e))?;

        row.map(row_to_notification).transpose()
    }

    async fn find_for_user(
        &self,
        user_id: UserId,
        unread_only: bool,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Notification>, DomainError> {
        let offset = (page.saturating_sub(1) as i64) * limit as i64;
        let rows = sqlx::query(&format!(
            r#"{}
            WHERE user_id = $1 AND ($2 = FALSE OR read = FALSE)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
            SELECT_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .bind(unread_only)
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list notifications", e))?;

        rows.into_iter().map(row_to_notification).collect()
    }

    async fn mark_all_read(&self, user_id: UserId) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE notifications SET read = TRUE WHERE user_id = $1 AND read = FALSE",
        )
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("mark notifications read", e))?;

        Ok(result.rows_affected())
    }

    async fn exists_since(
        &self,
        user_id: UserId,
        kind: NotificationKind,
        cycle_id: CycleId,
        since: Timestamp,
    ) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM notifications
            WHERE user_id = $1 AND kind = $2
              AND metadata ->> 'cycle_id' = $3
              AND created_at >= $4
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(kind.as_str())
        .bind(cycle_id.to_string())
        .bind(since.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("check notification existence", e))?;

        Ok(result.0 > 0)
    }

    async fn find_due_unsent(&self, now: Timestamp) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"{}
            WHERE scheduled_for IS NOT NULL
              AND scheduled_for <= $1
              AND email_sent = FALSE
            ORDER BY scheduled_for ASC
            "#,
            SELECT_COLUMNS
        ))
        .bind(now.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch due notifications", e))?;

        rows.into_iter().map(row_to_notification).collect()
    }
}

fn row_to_notification(row: sqlx::postgres::PgRow) -> Result<Notification, DomainError> {
    let id: Uuid = row.get("id");
    let user_id: Uuid = row.get("user_id");
    let kind: String = row.get("kind");
    let priority: String = row.get("priority");
    let scheduled_for: Option<DateTime<Utc>> = row.get("scheduled_for");
    let sent_at: Option<DateTime<Utc>> = row.get("sent_at");
    let created_at: DateTime<Utc> = row.get("created_at");

    Ok(Notification::reconstitute(
        NotificationId::from_uuid(id),
        UserId::from_uuid(user_id),
        kind.parse()?,
        row.get("title"),
        row.get("message"),
        priority.parse()?,
        row.get("read"),
        scheduled_for.map(Timestamp::from_datetime),
        sent_at.map(Timestamp::from_datetime),
        row.get("email_sent"),
        from_jsonb(row.get("metadata"), "metadata")?,
        Timestamp::from_datetime(created_at),
    ))
}
