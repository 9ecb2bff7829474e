//! PostgreSQL implementation of TemplateRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, TemplateId, Timestamp, UserId};
use crate::domain::review_template::ReviewTemplate;
use crate::ports::TemplateRepository;

use super::{db_error, from_jsonb, to_jsonb};

/// PostgreSQL implementation of TemplateRepository.
#[derive(Clone)]
pub struct PostgresTemplateRepository {
    pool: PgPool,
}

impl PostgresTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, description, questions, created_by, created_at
    FROM review_templates
"#;

#[async_trait]
impl TemplateRepository for PostgresTemplateRepository {
    async fn save(&self, template: &ReviewTemplate) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO review_templates (
                id, name, description, questions, created_by, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(template.id().as_uuid())
        .bind(template.name())
        .bind(template.description())
        .bind(to_jsonb(&template.questions(), "questions")?)
        .bind(template.created_by().as_uuid())
        .bind(template.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert template", e))?;

        Ok(())
    }

    async fn update(&self, template: &ReviewTemplate) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE review_templates SET
                name = $2,
                description = $3,
                questions = $4
            WHERE id = $1
            "#,
        )
        .bind(template.id().as_uuid())
        .bind(template.name())
        .bind(template.description())
        .bind(to_jsonb(&template.questions(), "questions")?)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update template", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TemplateNotFound,
                format!("Template not found: {}", template.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: TemplateId) -> Result<Option<ReviewTemplate>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch template", e))?;

        row.map(row_to_template).transpose()
    }

    async fn list(&self, page: u32, limit: u32) -> Result<Vec<ReviewTemplate>, DomainError> {
        let offset = (page.saturating_sub(1) as i64) * limit as i64;
        let rows = sqlx::query(&format!(
            "{} ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            SELECT_COLUMNS
        ))
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list templates", e))?;

        rows.into_iter().map(row_to_template).collect()
    }

    async fn delete(&self, id: TemplateId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM review_templates WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete template", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TemplateNotFound,
                format!("Template not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_template(row: sqlx::postgres::PgRow) -> Result<ReviewTemplate, DomainError> {
    let id: Uuid = row.get("id");
    let created_by: Uuid = row.get("created_by");
    let created_at: DateTime<Utc> = row.get("created_at");

    Ok(ReviewTemplate::reconstitute(
        TemplateId::from_uuid(id),
        row.get("name"),
        row.get("description"),
        from_jsonb(row.get("questions"), "questions")?,
        UserId::from_uuid(created_by),
        Timestamp::from_datetime(created_at),
    ))
}
