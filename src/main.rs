//! Upcoming Matches Updater - HTTP trigger
//!
//! `GET /update` clears `upcoming_matches` and reloads it from the odds proxy
//! for every tracked league, responding with the number of rows inserted.

use anyhow::Result;
use tracing::info;

use upcoming_matches::api::{router, AppState};
use upcoming_matches::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("upcoming_matches=info".parse()?)
                .add_directive("odds_updater=info".parse()?),
        )
        .init();

    info!("Upcoming Matches Updater v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let addr = format!("0.0.0.0:{}", config.http_port);
    let app = router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down...");
        })
        .await?;

    Ok(())
}
