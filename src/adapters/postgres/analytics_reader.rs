//! PostgreSQL implementation of AnalyticsReader.
//!
//! Cross-aggregate rollups computed in SQL. OKR scores are averaged over
//! the key_results JSONB of active OKRs.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::analytics::{FeedbackTrendPoint, TeamPerformance, TrendRange};
use crate::domain::foundation::{DomainError, TeamId};
use crate::ports::AnalyticsReader;

use super::db_error;

/// PostgreSQL implementation of AnalyticsReader.
#[derive(Clone)]
pub struct PostgresAnalyticsReader {
    pool: PgPool,
}

impl PostgresAnalyticsReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsReader for PostgresAnalyticsReader {
    async fn team_performance(
        &self,
        team: Option<TeamId>,
    ) -> Result<Vec<TeamPerformance>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT t.id AS team_id,
                   t.name AS team_name,
                   (SELECT COUNT(*) FROM users u
                     WHERE u.team_id = t.id AND u.is_active = TRUE) AS member_count,
                   (SELECT AVG((kr ->> 'score')::float8)
                      FROM okrs o
                      CROSS JOIN jsonb_array_elements(o.key_results) kr
                     WHERE o.status = 'active'
                       AND o.assigned_to IN
                           (SELECT id FROM users u WHERE u.team_id = t.id)
                   ) AS avg_okr_score,
                   (SELECT AVG(f.rating)::float8
                      FROM feedback f
                     WHERE f.rating IS NOT NULL
                       AND f.to_user IN
                           (SELECT id FROM users u WHERE u.team_id = t.id)
                   ) AS avg_feedback_rating
            FROM teams t
            WHERE ($1::uuid IS NULL OR t.id = $1)
            ORDER BY t.name ASC
            "#,
        )
        .bind(team.map(|t| *t.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("compute team performance", e))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let team_id: Uuid = row.get("team_id");
                let member_count: i64 = row.get("member_count");
                TeamPerformance {
                    team_id: TeamId::from_uuid(team_id),
                    team_name: row.get("team_name"),
                    member_count: member_count.max(0) as u32,
                    avg_okr_score: row.get("avg_okr_score"),
                    avg_feedback_rating: row.get("avg_feedback_rating"),
                }
            })
            .collect())
    }

    async fn feedback_trends(
        &self,
        range: TrendRange,
    ) -> Result<Vec<FeedbackTrendPoint>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT to_char(date_trunc('month', created_at), 'YYYY-MM') AS month,
                   COUNT(*) AS count,
                   AVG(rating)::float8 AS avg_rating
            FROM feedback
            WHERE created_at >= $1 AND created_at <= $2
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
        .bind(range.from.as_datetime())
        .bind(range.to.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("compute feedback trends", e))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let count: i64 = row.get("count");
                FeedbackTrendPoint {
                    month: row.get("month"),
                    count: count.max(0) as u64,
                    avg_rating: row.get("avg_rating"),
                }
            })
            .collect())
    }
}
