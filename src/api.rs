use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::config::Config;
use crate::error::ApiError;
use crate::fetcher::OddsFetcher;
use crate::leagues::LEAGUES;
use crate::pipeline::refresh_upcoming_matches;
use crate::store::PgSnapshotWriter;

/// What `/health` reports about past `/update` runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HealthSnapshot {
    pub last_run: Option<DateTime<Utc>>,
    pub last_inserted: usize,
    pub consecutive_errors: usize,
}

impl HealthSnapshot {
    fn status(&self) -> (StatusCode, &'static str) {
        let http_status = if self.consecutive_errors > 10 {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::OK
        };
        let status = if self.consecutive_errors > 5 { "degraded" } else { "ok" };
        (http_status, status)
    }
}

/// Shared handle to the health snapshot; each update replaces it under one lock.
#[derive(Clone, Default)]
pub struct HealthState {
    inner: Arc<RwLock<HealthSnapshot>>,
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> HealthSnapshot {
        *self.inner.read().await
    }

    pub async fn record_success(&self, inserted: usize) {
        *self.inner.write().await = HealthSnapshot {
            last_run: Some(Utc::now()),
            last_inserted: inserted,
            consecutive_errors: 0,
        };
    }

    pub async fn record_error(&self) {
        self.inner.write().await.consecutive_errors += 1;
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: OddsFetcher,
    pub health: HealthState,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let fetcher = OddsFetcher::new(config.proxy_base_url.clone(), config.request_timeout)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher,
            health: HealthState::new(),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/update", get(update_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "Updater is running" }))
}

/// Runs the whole refresh before responding.
async fn update_handler(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    match run_refresh(&state).await {
        Ok(inserted) => {
            state.health.record_success(inserted).await;
            Ok(Json(json!({ "inserted": inserted })))
        }
        Err(e) => {
            state.health.record_error().await;
            error!("Update failed: {:?}", e);
            Err(e.into())
        }
    }
}

async fn run_refresh(state: &AppState) -> anyhow::Result<usize> {
    let start = std::time::Instant::now();

    let mut writer = PgSnapshotWriter::connect(&state.config.database_url).await?;
    let report = refresh_upcoming_matches(&state.fetcher, &mut writer, LEAGUES).await?;
    writer.close().await?;

    info!(
        "Update completed: {} matches in {:?}",
        report.inserted,
        start.elapsed()
    );
    Ok(report.inserted)
}

async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let health = state.health.snapshot().await;
    let (http_status, status) = health.status();

    (
        http_status,
        Json(json!({
            "service": "odds-updater",
            "version": env!("CARGO_PKG_VERSION"),
            "status": status,
            "last_run": health.last_run.map(|t| t.to_rfc3339()),
            "last_inserted": health.last_inserted,
            "consecutive_errors": health.consecutive_errors
        })),
    )
}
