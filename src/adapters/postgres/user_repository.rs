//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{
    DepartmentId, DomainError, ErrorCode, TeamId, Timestamp, UserId,
};
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::db_error;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, email, name, role, department_id, team_id, manager_id,
           hired_at, is_active, email_notifications, created_at
    FROM users
"#;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, email, name, role, department_id, team_id, manager_id,
                hired_at, is_active, email_notifications, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.email())
        .bind(user.name())
        .bind(user.role().as_str())
        .bind(user.department_id().map(|id| *id.as_uuid()))
        .bind(user.team_id().map(|id| *id.as_uuid()))
        .bind(user.manager_id().map(|id| *id.as_uuid()))
        .bind(user.hired_at().map(|t| *t.as_datetime()))
        .bind(user.is_active())
        .bind(user.email_notifications())
        .bind(user.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert user", e))?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                email = $2,
                name = $3,
                role = $4,
                department_id = $5,
                team_id = $6,
                manager_id = $7,
                hired_at = $8,
                is_active = $9,
                email_notifications = $10
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.email())
        .bind(user.name())
        .bind(user.role().as_str())
        .bind(user.department_id().map(|id| *id.as_uuid()))
        .bind(user.team_id().map(|id| *id.as_uuid()))
        .bind(user.manager_id().map(|id| *id.as_uuid()))
        .bind(user.hired_at().map(|t| *t.as_datetime()))
        .bind(user.is_active())
        .bind(user.email_notifications())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", user.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch user", e))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE email = $1", SELECT_COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch user by email", e))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_team(&self, team_id: TeamId) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE team_id = $1 AND is_active = TRUE ORDER BY name ASC",
            SELECT_COLUMNS
        ))
        .bind(team_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch team members", e))?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_reports(&self, manager_id: UserId) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE manager_id = $1 AND is_active = TRUE ORDER BY name ASC",
            SELECT_COLUMNS
        ))
        .bind(manager_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch direct reports", e))?;

        rows.into_iter().map(row_to_user).collect()
    }
}

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: Uuid = row.get("id");
    let role: String = row.get("role");
    let department_id: Option<Uuid> = row.get("department_id");
    let team_id: Option<Uuid> = row.get("team_id");
    let manager_id: Option<Uuid> = row.get("manager_id");
    let hired_at: Option<DateTime<Utc>> = row.get("hired_at");
    let created_at: DateTime<Utc> = row.get("created_at");

    Ok(User::reconstitute(
        UserId::from_uuid(id),
        row.get("email"),
        row.get("name"),
        role.parse()?,
        department_id.map(DepartmentId::from_uuid),
        team_id.map(TeamId::from_uuid),
        manager_id.map(UserId::from_uuid),
        hired_at.map(Timestamp::from_datetime),
        row.get("is_active"),
        row.get("email_notifications"),
        Timestamp::from_datetime(created_at),
    ))
}
