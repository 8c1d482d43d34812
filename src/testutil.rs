//! In-process stand-ins for the odds proxy and the database.

use anyhow::{anyhow, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::models::UpcomingMatch;
use crate::store::SnapshotStore;

/// How the mock proxy answers for one league key.
#[derive(Debug, Clone)]
pub enum MockLeague {
    Body(Value),
    Status(u16),
    Delayed(Duration),
}

/// Serve `/odds?league=..` on an ephemeral port; returns the base URL.
/// Unknown league keys get a 404.
pub async fn spawn_upstream(leagues: Vec<(&'static str, MockLeague)>) -> String {
    let leagues: HashMap<String, MockLeague> = leagues
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let app = Router::new()
        .route("/odds", get(mock_odds))
        .with_state(Arc::new(leagues));

    serve(app).await
}

/// Serve any router on an ephemeral port; returns the base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn mock_odds(
    State(leagues): State<Arc<HashMap<String, MockLeague>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(league) = params.get("league").and_then(|k| leagues.get(k)) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match league {
        MockLeague::Body(body) => Json(body.clone()).into_response(),
        MockLeague::Status(code) => (
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "upstream failure",
        )
            .into_response(),
        MockLeague::Delayed(delay) => {
            tokio::time::sleep(*delay).await;
            Json(json!([])).into_response()
        }
    }
}

/// Snapshot store backed by a Vec, mirroring the table's replace semantics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub rows: Vec<UpcomingMatch>,
    pub clears: usize,
    pub commits: usize,
    /// Fail `write_league` once this many leagues have been committed.
    pub fail_after_commits: Option<usize>,
}

impl SnapshotStore for MemoryStore {
    async fn clear_all(&mut self) -> Result<u64> {
        let removed = self.rows.len() as u64;
        self.rows.clear();
        self.clears += 1;
        Ok(removed)
    }

    async fn write_league(&mut self, rows: &[UpcomingMatch]) -> Result<usize> {
        if self.fail_after_commits == Some(self.commits) {
            return Err(anyhow!("connection reset by peer"));
        }
        self.rows.extend_from_slice(rows);
        self.commits += 1;
        Ok(rows.len())
    }
}

/// One provider match with a single bookmaker quoting h2h.
pub fn match_json(home: &str, away: &str, commence: &str, prices: (f64, f64, f64)) -> Value {
    json!({
        "home_team": home,
        "away_team": away,
        "commence_time": commence,
        "bookmakers": [{
            "markets": [{
                "key": "h2h",
                "outcomes": [
                    { "name": home, "price": prices.0 },
                    { "name": "Draw", "price": prices.1 },
                    { "name": away, "price": prices.2 }
                ]
            }]
        }]
    })
}
