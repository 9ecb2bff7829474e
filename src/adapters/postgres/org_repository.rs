//! PostgreSQL implementation of OrgRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DepartmentId, DomainError, TeamId, Timestamp, UserId};
use crate::domain::org::{Department, Team};
use crate::ports::OrgRepository;

use super::db_error;

/// PostgreSQL implementation of OrgRepository.
#[derive(Clone)]
pub struct PostgresOrgRepository {
    pool: PgPool,
}

impl PostgresOrgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrgRepository for PostgresOrgRepository {
    async fn save_department(&self, department: &Department) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO departments (id, name, created_at) VALUES ($1, $2, $3)",
        )
        .bind(department.id().as_uuid())
        .bind(department.name())
        .bind(department.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert department", e))?;

        Ok(())
    }

    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DomainError> {
        let row = sqlx::query("SELECT id, name, created_at FROM departments WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch department", e))?;

        Ok(row.map(row_to_department))
    }

    async fn list_departments(&self) -> Result<Vec<Department>, DomainError> {
        let rows = sqlx::query("SELECT id, name, created_at FROM departments ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list departments", e))?;

        Ok(rows.into_iter().map(row_to_department).collect())
    }

    async fn save_team(&self, team: &Team) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, department_id, lead_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(team.id().as_uuid())
        .bind(team.name())
        .bind(team.department_id().as_uuid())
        .bind(team.lead_id().map(|id| *id.as_uuid()))
        .bind(team.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("insert team", e))?;

        Ok(())
    }

    async fn find_team(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, department_id, lead_id, created_at FROM teams WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch team", e))?;

        Ok(row.map(row_to_team))
    }

    async fn list_teams(&self) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, name, department_id, lead_id, created_at FROM teams ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list teams", e))?;

        Ok(rows.into_iter().map(row_to_team).collect())
    }
}

fn row_to_department(row: sqlx::postgres::PgRow) -> Department {
    let id: Uuid = row.get("id");
    let created_at: DateTime<Utc> = row.get("created_at");
    Department::reconstitute(
        DepartmentId::from_uuid(id),
        row.get("name"),
        Timestamp::from_datetime(created_at),
    )
}

fn row_to_team(row: sqlx::postgres::PgRow) -> Team {
    let id: Uuid = row.get("id");
    let department_id: Uuid = row.get("department_id");
    let lead_id: Option<Uuid> = row.get("lead_id");
    let created_at: DateTime<Utc> = row.get("created_at");
    Team::reconstitute(
        TeamId::from_uuid(id),
        row.get("name"),
        DepartmentId::from_uuid(department_id),
        lead_id.map(UserId::from_uuid),
        Timestamp::from_datetime(created_at),
    )
}
