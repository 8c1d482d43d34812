//! One-shot refresh of `upcoming_matches`.
//!
//! Prints per-league results and the total inserted. Exits non-zero only if
//! the database cannot be reached or written; league fetch failures are
//! reported and skipped.

use anyhow::Result;
use tracing::error;

use upcoming_matches::fetcher::OddsFetcher;
use upcoming_matches::leagues::LEAGUES;
use upcoming_matches::store::PgSnapshotWriter;
use upcoming_matches::{refresh_upcoming_matches_with, Config, LeagueOutcome, LeagueResult};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("upcoming_matches=info".parse()?)
                .add_directive("insert_upcoming_matches=info".parse()?),
        )
        .init();

    println!("Starting upcoming matches update...");

    let config = Config::from_env()?;
    let fetcher = OddsFetcher::new(config.proxy_base_url.clone(), config.request_timeout)?;

    let mut writer = PgSnapshotWriter::connect(&config.database_url).await?;
    let report = match refresh_upcoming_matches_with(&fetcher, &mut writer, LEAGUES, print_league)
        .await
    {
        Ok(report) => report,
        Err(e) => {
            error!("Update failed: {:?}", e);
            return Err(e);
        }
    };
    writer.close().await?;

    println!("\nTOTAL INSERTED: {}", report.inserted);
    println!("Done.");
    Ok(())
}

fn print_league(outcome: &LeagueOutcome) {
    println!("\n=== {} ===", outcome.league);
    match &outcome.result {
        LeagueResult::Inserted { inserted, .. } => println!("inserted {}", inserted),
        LeagueResult::Failed(e) => println!("FAILED {}: {}", outcome.league, e),
    }
}
