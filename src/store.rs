use anyhow::{Context, Result};
use sqlx::{Connection, PgConnection, Postgres, Transaction};
use std::future::Future;
use tracing::info;

use crate::models::UpcomingMatch;

/// Destination of a snapshot refresh.
///
/// `clear_all` runs once before any league; `write_league` is called once
/// per successfully fetched league and must make that league's rows durable
/// as a unit.
pub trait SnapshotStore {
    /// Remove the previous snapshot. Returns the number of rows removed.
    fn clear_all(&mut self) -> impl Future<Output = Result<u64>> + Send;

    /// Append one league's rows. Returns the number of rows written.
    fn write_league(
        &mut self,
        rows: &[UpcomingMatch],
    ) -> impl Future<Output = Result<usize>> + Send;
}

/// Postgres writer holding a single connection for the length of one run.
pub struct PgSnapshotWriter {
    conn: PgConnection,
}

impl PgSnapshotWriter {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let conn = PgConnection::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        info!("Connected to PostgreSQL");
        Ok(Self { conn })
    }

    pub async fn close(self) -> Result<()> {
        self.conn.close().await.context("Failed to close database connection")
    }
}

impl SnapshotStore for PgSnapshotWriter {
    async fn clear_all(&mut self) -> Result<u64> {
        info!("Clearing old upcoming matches...");
        let result = sqlx::query("DELETE FROM upcoming_matches")
            .execute(&mut self.conn)
            .await
            .context("Failed to clear upcoming_matches")?;
        Ok(result.rows_affected())
    }

    async fn write_league(&mut self, rows: &[UpcomingMatch]) -> Result<usize> {
        let mut tx = self.conn.begin().await?;

        for row in rows {
            insert_one(&mut tx, row).await?;
        }

        tx.commit().await.context("Failed to commit league snapshot")?;
        Ok(rows.len())
    }
}

/// Plain insert; the preceding clear makes upserts unnecessary.
pub async fn insert_one(tx: &mut Transaction<'_, Postgres>, row: &UpcomingMatch) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO upcoming_matches
            (league, home_team, away_team, match_time, home_odds, draw_odds, away_odds)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(&row.league)
    .bind(&row.home_team)
    .bind(&row.away_team)
    .bind(row.match_time)
    .bind(row.home_odds)
    .bind(row.draw_odds)
    .bind(row.away_odds)
    .execute(&mut **tx)
    .await
    .with_context(|| {
        format!(
            "Failed to insert {} vs {} ({})",
            row.home_team, row.away_team, row.league
        )
    })?;

    Ok(())
}
