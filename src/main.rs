//! Perfhub server entrypoint.
//!
//! Loads configuration, wires the adapters into the application layer,
//! spawns the recurring jobs, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use perfhub::adapters::ai::{
    FailoverProvider, GeminiConfig, GeminiProvider, OpenAiConfig, OpenAiProvider,
};
use perfhub::adapters::auth::JwtTokenValidator;
use perfhub::adapters::cache::RedisCache;
use perfhub::adapters::email::SmtpEmailSender;
use perfhub::adapters::http::{
    api_router, AnalyticsAppState, ApiStates, CyclesAppState, FeedbackAppState, HealthAppState,
    NotificationsAppState, OkrsAppState, OrgAppState, SubmissionsAppState, TemplatesAppState,
    TimeEntriesAppState,
};
use perfhub::adapters::postgres::{
    PostgresAnalyticsReader, PostgresCycleRepository, PostgresFeedbackRepository,
    PostgresNotificationRepository, PostgresOkrRepository, PostgresOrgRepository,
    PostgresSubmissionRepository, PostgresTemplateRepository, PostgresTimeEntryRepository,
    PostgresUserRepository,
};
use perfhub::adapters::scheduler::Scheduler;
use perfhub::application::handlers::jobs::{DailyReminderJob, ScheduledFlushJob, UrgentDeadlineJob};
use perfhub::application::handlers::notification::Notifier;
use perfhub::config::AppConfig;
use perfhub::ports::{AiProvider, SystemClock};

const DAILY_REMINDER_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);
const URGENT_DEADLINE_INTERVAL: Duration = Duration::from_secs(60 * 60);
const FLUSH_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    tracing::info!("perfhub starting");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!("database pool ready");

    let redis_client = redis::Client::open(config.redis.url.as_str())?;
    let redis_conn = redis_client.get_multiplexed_tokio_connection().await?;
    let cache = Arc::new(RedisCache::new(redis_conn));
    tracing::info!("redis connection ready");

    let email = Arc::new(SmtpEmailSender::new(&config.email.smtp_settings())?);

    let ai = build_ai_provider(&config);
    tracing::info!(provider = ai.name(), "AI provider ready");

    let validator = Arc::new(JwtTokenValidator::new(config.auth.jwt_secret.clone()));

    let cycles = Arc::new(PostgresCycleRepository::new(pool.clone()));
    let submissions = Arc::new(PostgresSubmissionRepository::new(pool.clone()));
    let okrs = Arc::new(PostgresOkrRepository::new(pool.clone()));
    let feedback = Arc::new(PostgresFeedbackRepository::new(pool.clone()));
    let notifications = Arc::new(PostgresNotificationRepository::new(pool.clone()));
    let time_entries = Arc::new(PostgresTimeEntryRepository::new(pool.clone()));
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let templates = Arc::new(PostgresTemplateRepository::new(pool.clone()));
    let org = Arc::new(PostgresOrgRepository::new(pool.clone()));
    let analytics = Arc::new(PostgresAnalyticsReader::new(pool.clone()));

    let notifier = Arc::new(Notifier::new(
        notifications.clone(),
        users.clone(),
        email.clone(),
    ));

    let job_handles = Scheduler::new()
        .every(
            DAILY_REMINDER_INTERVAL,
            Arc::new(DailyReminderJob::new(
                cycles.clone(),
                notifications.clone(),
                notifier.clone(),
            )),
        )
        .every(
            URGENT_DEADLINE_INTERVAL,
            Arc::new(UrgentDeadlineJob::new(
                cycles.clone(),
                notifications.clone(),
                notifier.clone(),
            )),
        )
        .every(
            FLUSH_INTERVAL,
            Arc::new(ScheduledFlushJob::new(
                notifications.clone(),
                notifier.clone(),
            )),
        )
        .spawn();
    tracing::info!(jobs = job_handles.len(), "recurring jobs spawned");

    let states = ApiStates {
        cycles: CyclesAppState::new(cycles.clone(), templates.clone(), notifier.clone()),
        submissions: SubmissionsAppState {
            submissions: submissions.clone(),
            cycles: cycles.clone(),
            feedback: feedback.clone(),
            okrs: okrs.clone(),
            users: users.clone(),
            ai: ai.clone(),
            clock: Arc::new(SystemClock),
        },
        okrs: OkrsAppState::new(okrs),
        feedback: FeedbackAppState {
            feedback,
            users: users.clone(),
            ai,
            notifier,
        },
        notifications: NotificationsAppState::new(notifications),
        analytics: AnalyticsAppState {
            reader: analytics,
            cache: cache.clone(),
            users,
        },
        time_entries: TimeEntriesAppState::new(time_entries),
        templates: TemplatesAppState::new(templates),
        org: OrgAppState::new(org),
        health: HealthAppState {
            db: pool.clone(),
            cache,
        },
    };

    let app = api_router(states, validator);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAI is the primary when its key is present; Gemini serves as the
/// fallback, or as the sole provider when only its key is configured.
fn build_ai_provider(config: &AppConfig) -> Arc<dyn AiProvider> {
    let openai = config.ai.openai_api_key.as_ref().filter(|k| !k.is_empty());
    let gemini = config.ai.gemini_api_key.as_ref().filter(|k| !k.is_empty());
    let timeout = config.ai.request_timeout();

    match (openai, gemini) {
        (Some(openai_key), Some(gemini_key)) => {
            let primary = Arc::new(OpenAiProvider::new(
                OpenAiConfig::new(openai_key.clone())
                    .with_model(config.ai.openai_model.clone())
                    .with_timeout(timeout),
            ));
            let fallback = Arc::new(GeminiProvider::new(
                GeminiConfig::new(gemini_key.clone())
                    .with_model(config.ai.gemini_model.clone())
                    .with_timeout(timeout),
            ));
            Arc::new(FailoverProvider::new(primary).with_fallback(fallback))
        }
        (Some(openai_key), None) => Arc::new(OpenAiProvider::new(
            OpenAiConfig::new(openai_key.clone())
                .with_model(config.ai.openai_model.clone())
                .with_timeout(timeout),
        )),
        (None, _) => {
            let gemini_key = config
                .ai
                .gemini_api_key
                .clone()
                .unwrap_or_default();
            Arc::new(GeminiProvider::new(
                GeminiConfig::new(gemini_key)
                    .with_model(config.ai.gemini_model.clone())
                    .with_timeout(timeout),
            ))
        }
    }
}
