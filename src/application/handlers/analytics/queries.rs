//! Team performance and feedback trend queries.
//!
//! Both read through the cache under composite keys with a five-minute TTL.
//! Cache failures degrade to the live query and log at warn.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::application::Caller;
use crate::domain::analytics::{FeedbackTrendPoint, TeamPerformance, TrendRange};
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{DomainError, ErrorCode, TeamId};
use crate::ports::{AnalyticsReader, Cache, UserRepository};

const CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct TeamPerformanceHandler {
    reader: Arc<dyn AnalyticsReader>,
    cache: Arc<dyn Cache>,
    users: Arc<dyn UserRepository>,
}

impl TeamPerformanceHandler {
    pub fn new(
        reader: Arc<dyn AnalyticsReader>,
        cache: Arc<dyn Cache>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reader,
            cache,
            users,
        }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        team: Option<TeamId>,
    ) -> Result<Vec<TeamPerformance>, AnalyticsError> {
        authorize(caller.role, Resource::Analytics, Action::Read)?;
        let scope = self.resolve_scope(caller, team).await?;

        let key = match scope {
            Some(team_id) => format!("analytics:team_performance:{}", team_id),
            None => "analytics:team_performance:all".to_string(),
        };
        if let Some(cached) = cache_get::<Vec<TeamPerformance>>(self.cache.as_ref(), &key).await {
            return Ok(cached);
        }

        let rows = self.reader.team_performance(scope).await?;
        cache_put(self.cache.as_ref(), &key, &rows).await;
        Ok(rows)
    }

    /// HR and admins may scope freely; managers are pinned to their own team.
    async fn resolve_scope(
        &self,
        caller: Caller,
        requested: Option<TeamId>,
    ) -> Result<Option<TeamId>, DomainError> {
        if caller.is_hr_or_admin() {
            return Ok(requested);
        }
        let own_team = self
            .users
            .find_by_id(caller.user_id)
            .await?
            .and_then(|u| u.team_id())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::Forbidden, "caller has no team to report on")
            })?;
        match requested {
            Some(team) if team != own_team => Err(DomainError::new(
                ErrorCode::Forbidden,
                "managers may only view their own team",
            )),
            _ => Ok(Some(own_team)),
        }
    }
}

pub struct FeedbackTrendsHandler {
    reader: Arc<dyn AnalyticsReader>,
    cache: Arc<dyn Cache>,
}

impl FeedbackTrendsHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>, cache: Arc<dyn Cache>) -> Self {
        Self { reader, cache }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        range: TrendRange,
    ) -> Result<Vec<FeedbackTrendPoint>, AnalyticsError> {
        authorize(caller.role, Resource::Analytics, Action::Read)?;

        let key = format!("analytics:feedback_trends:{}", range.cache_key_fragment());
        if let Some(cached) = cache_get::<Vec<FeedbackTrendPoint>>(self.cache.as_ref(), &key).await
        {
            return Ok(cached);
        }

        let points = self.reader.feedback_trends(range).await?;
        cache_put(self.cache.as_ref(), &key, &points).await;
        Ok(points)
    }
}

/// Cache read treating every failure, miss, or stale payload as a miss.
async fn cache_get<T: DeserializeOwned>(cache: &dyn Cache, key: &str) -> Option<T> {
    match cache.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding undecodable cache entry");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(key, error = %err, "cache read failed, querying live");
            None
        }
    }
}

async fn cache_put<T: Serialize>(cache: &dyn Cache, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(key, error = %err, "skipping cache write");
            return;
        }
    };
    if let Err(err) = cache.set(key, &raw, CACHE_TTL).await {
        tracing::warn!(key, error = %err, "cache write failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, Timestamp, UserId};
    use crate::domain::user::User;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MemoryCache {
        entries: Mutex<HashMap<String, String>>,
    }

    impl MemoryCache {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                entries: Mutex::new(HashMap::new()),
            })
        }
    }

    #[async_trait]
    impl Cache for MemoryCache {
        async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }
        async fn set(&self, key: &str, value: &str, _ttl: Duration) -> Result<(), DomainError> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
        async fn invalidate(&self, key: &str) -> Result<(), DomainError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct BrokenCache;

    #[async_trait]
    impl Cache for BrokenCache {
        async fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
            Err(DomainError::new(ErrorCode::CacheError, "redis down"))
        }
        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::CacheError, "redis down"))
        }
        async fn invalidate(&self, _key: &str) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::CacheError, "redis down"))
        }
    }

    struct CountingReader {
        calls: AtomicUsize,
        team: Option<TeamId>,
    }

    impl CountingReader {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                team: Some(TeamId::new()),
            })
        }
    }

    #[async_trait]
    impl AnalyticsReader for CountingReader {
        async fn team_performance(
            &self,
            team: Option<TeamId>,
        ) -> Result<Vec<TeamPerformance>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![TeamPerformance {
                team_id: team.or(self.team).unwrap_or_else(TeamId::new),
                team_name: "Platform".to_string(),
                member_count: 4,
                avg_okr_score: Some(7.5),
                avg_feedback_rating: Some(4.2),
            }])
        }

        async fn feedback_trends(
            &self,
            _range: TrendRange,
        ) -> Result<Vec<FeedbackTrendPoint>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![FeedbackTrendPoint {
                month: "2026-08".to_string(),
                count: 12,
                avg_rating: Some(4.1),
            }])
        }
    }

    struct MockUsers {
        user: Option<User>,
    }

    #[async_trait]
    impl UserRepository for MockUsers {
        async fn save(&self, _user: &User) -> Result<(), DomainError> {
            Ok(())
        }
        async fn update(&self, _user: &User) -> Result<(), DomainError> {
            Ok(())
        }
        async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, DomainError> {
            Ok(self.user.clone())
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
            Ok(None)
        }
        async fn find_by_team(&self, _team_id: TeamId) -> Result<Vec<User>, DomainError> {
            Ok(vec![])
        }
        async fn find_reports(&self, _manager_id: UserId) -> Result<Vec<User>, DomainError> {
            Ok(vec![])
        }
    }

    fn manager_on_team(team: TeamId) -> User {
        User::new("mgr@example.com", "Mgr", Role::Manager)
            .unwrap()
            .assign_to(None, Some(team))
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let reader = CountingReader::new();
        let handler = TeamPerformanceHandler::new(
            reader.clone(),
            MemoryCache::new(),
            Arc::new(MockUsers { user: None }),
        );

        let hr = Caller::new(UserId::new(), Role::Hr);
        handler.handle(hr, None).await.unwrap();
        handler.handle(hr, None).await.unwrap();
        assert_eq!(reader.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn broken_cache_falls_back_to_live_queries() {
        let reader = CountingReader::new();
        let handler = TeamPerformanceHandler::new(
            reader.clone(),
            Arc::new(BrokenCache),
            Arc::new(MockUsers { user: None }),
        );

        let hr = Caller::new(UserId::new(), Role::Hr);
        let rows = handler.handle(hr, None).await.unwrap();
        assert_eq!(rows.len(), 1);
        handler.handle(hr, None).await.unwrap();
        assert_eq!(reader.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn managers_are_pinned_to_their_own_team() {
        let team = TeamId::new();
        let manager = manager_on_team(team);
        let manager_id = manager.id();
        let handler = TeamPerformanceHandler::new(
            CountingReader::new(),
            MemoryCache::new(),
            Arc::new(MockUsers {
                user: Some(manager),
            }),
        );

        let caller = Caller::new(manager_id, Role::Manager);
        let rows = handler.handle(caller, None).await.unwrap();
        assert_eq!(rows[0].team_id, team);

        let other = handler.handle(caller, Some(TeamId::new())).await;
        assert!(other.is_err());
    }

    #[tokio::test]
    async fn employees_are_denied() {
        let handler = TeamPerformanceHandler::new(
            CountingReader::new(),
            MemoryCache::new(),
            Arc::new(MockUsers { user: None }),
        );

        let caller = Caller::new(UserId::new(), Role::Employee);
        assert!(handler.handle(caller, None).await.is_err());
    }

    #[tokio::test]
    async fn trend_reads_cache_by_range() {
        let reader = CountingReader::new();
        let handler = FeedbackTrendsHandler::new(reader.clone(), MemoryCache::new());

        let hr = Caller::new(UserId::new(), Role::Hr);
        let from = Timestamp::now().minus_days(180);
        let range_a = TrendRange::new(from, from.plus_days(90)).unwrap();
        let range_b = TrendRange::new(from, from.plus_days(30)).unwrap();

        handler.handle(hr, range_a).await.unwrap();
        handler.handle(hr, range_a).await.unwrap();
        handler.handle(hr, range_b).await.unwrap();
        assert_eq!(reader.calls.load(Ordering::SeqCst), 2);
    }
}
