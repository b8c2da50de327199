use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::domain_events::TracingDomainEventSink;
use goaltracker_core::{
    events::DomainEventSink,
    goals::{GoalService, GoalServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    storage::{InMemoryKeyValueStore, KeyValueStoreTrait, YearStore},
    updates::{ProgressUpdateService, ProgressUpdateServiceTrait},
    utils::{Clock, SystemClock},
};
use goaltracker_storage_sqlite::{db, SqliteKeyValueStore};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub update_service: Arc<dyn ProgressUpdateServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub clock: Arc<dyn Clock>,
}

/// Where the key-value store lives for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    Sqlite(String),
    InMemory,
}

/// Logs go to stderr so command output on stdout stays machine readable.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub async fn build_state(target: StorageTarget) -> anyhow::Result<Arc<AppState>> {
    let kv: Arc<dyn KeyValueStoreTrait> = match target {
        StorageTarget::Sqlite(path) => {
            let db_path = db::init(&path)?;
            tracing::info!("Database path in use: {}", db_path);
            let pool = db::create_pool(&db_path)?;
            db::run_migrations(&pool)?;
            let writer = db::spawn_writer((*pool).clone());
            Arc::new(SqliteKeyValueStore::new(pool, writer))
        }
        StorageTarget::InMemory => {
            tracing::info!("Using in-memory storage");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    Ok(build_services(kv, Arc::new(SystemClock)))
}

pub fn build_services(kv: Arc<dyn KeyValueStoreTrait>, clock: Arc<dyn Clock>) -> Arc<AppState> {
    let store = Arc::new(YearStore::new(kv));
    let event_sink: Arc<dyn DomainEventSink> = Arc::new(TracingDomainEventSink);

    let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(
        GoalService::new(store.clone(), clock.clone()).with_event_sink(event_sink.clone()),
    );
    let update_service: Arc<dyn ProgressUpdateServiceTrait> = Arc::new(
        ProgressUpdateService::new(store, clock.clone()).with_event_sink(event_sink),
    );
    let report_service: Arc<dyn ReportServiceTrait> = Arc::new(ReportService::new(
        goal_service.clone(),
        update_service.clone(),
        clock.clone(),
    ));

    Arc::new(AppState {
        goal_service,
        update_service,
        report_service,
        clock,
    })
}
