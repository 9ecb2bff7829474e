//! HTTP handlers for the analytics endpoints.
//!
//! Responses serialize the domain view types directly; the reads are
//! cached by the application handlers, not here.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::application::handlers::analytics::{FeedbackTrendsHandler, TeamPerformanceHandler};
use crate::domain::analytics::TrendRange;
use crate::domain::foundation::{TeamId, Timestamp};
use crate::ports::{AnalyticsReader, Cache, UserRepository};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;

const DEFAULT_TREND_WINDOW_DAYS: i64 = 180;

#[derive(Clone)]
pub struct AnalyticsAppState {
    pub reader: Arc<dyn AnalyticsReader>,
    pub cache: Arc<dyn Cache>,
    pub users: Arc<dyn UserRepository>,
}

impl AnalyticsAppState {
    fn team_performance_handler(&self) -> TeamPerformanceHandler {
        TeamPerformanceHandler::new(self.reader.clone(), self.cache.clone(), self.users.clone())
    }

    fn feedback_trends_handler(&self) -> FeedbackTrendsHandler {
        FeedbackTrendsHandler::new(self.reader.clone(), self.cache.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamPerformanceParams {
    pub team_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// GET /api/analytics/team-performance
pub async fn team_performance(
    State(state): State<AnalyticsAppState>,
    RequireAuth(caller): RequireAuth,
    Query(params): Query<TeamPerformanceParams>,
) -> Result<impl IntoResponse, ApiError> {
    let team: Option<TeamId> = params
        .team_id
        .as_deref()
        .map(|raw| {
            raw.parse()
                .map_err(|_| ApiError::bad_request("Invalid team ID format"))
        })
        .transpose()?;

    let rows = state
        .team_performance_handler()
        .handle(caller, team)
        .await?;
    Ok(Json(rows))
}

/// GET /api/analytics/feedback-trends
///
/// Defaults to the trailing six months when no range is given.
pub async fn feedback_trends(
    State(state): State<AnalyticsAppState>,
    RequireAuth(caller): RequireAuth,
    Query(params): Query<TrendParams>,
) -> Result<impl IntoResponse, ApiError> {
    let to = params
        .to
        .map(Timestamp::from_datetime)
        .unwrap_or_else(Timestamp::now);
    let from = params
        .from
        .map(Timestamp::from_datetime)
        .unwrap_or_else(|| to.minus_days(DEFAULT_TREND_WINDOW_DAYS));
    let range = TrendRange::new(from, to)?;

    let points = state
        .feedback_trends_handler()
        .handle(caller, range)
        .await?;
    Ok(Json(points))
}
