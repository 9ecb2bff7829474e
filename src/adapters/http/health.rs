//! Health and readiness endpoints.
//!
//! These routes sit outside the authenticated API surface. `/live` is a
//! bare liveness probe; `/ready` and `/api/health` check the database,
//! and `/api/health` reports the cache as well. A cache outage degrades
//! the health report without failing it, matching how the rest of the
//! system treats the cache.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sqlx::PgPool;

use crate::ports::Cache;

#[derive(Clone)]
pub struct HealthAppState {
    pub db: PgPool,
    pub cache: Arc<dyn Cache>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    cache: &'static str,
}

pub fn health_router() -> Router<HealthAppState> {
    Router::new()
        .route("/live", get(live))
        .route("/ready", get(ready))
        .route("/api/health", get(health))
}

async fn live() -> StatusCode {
    StatusCode::OK
}

async fn ready(State(state): State<HealthAppState>) -> StatusCode {
    if db_up(&state.db).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn health(State(state): State<HealthAppState>) -> impl IntoResponse {
    let database = db_up(&state.db).await;
    let cache = cache_up(state.cache.as_ref()).await;

    let (status_code, status) = if database {
        (StatusCode::OK, if cache { "ok" } else { "degraded" })
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            database: if database { "up" } else { "down" },
            cache: if cache { "up" } else { "down" },
        }),
    )
}

async fn db_up(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}

async fn cache_up(cache: &dyn Cache) -> bool {
    cache
        .set("health:probe", "ok", Duration::from_secs(10))
        .await
        .is_ok()
}
