use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::info;

use crate::error::FetchError;
use crate::models::RawMatch;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the odds proxy's per-league endpoint.
#[derive(Clone)]
pub struct OddsFetcher {
    base_url: String,
    http_client: reqwest::Client,
}

impl OddsFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/odds?league={key}`. Any transport error, non-2xx status,
    /// or non-array body fails the whole league. Entries are kept one for one;
    /// unreadable ones come back empty and are rejected later as missing fields.
    pub async fn fetch_league(&self, provider_key: &str) -> Result<Vec<RawMatch>, FetchError> {
        info!("Fetching {}...", provider_key);

        let response = self
            .http_client
            .get(format!("{}/odds", self.base_url))
            .query(&[("league", provider_key)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        let entries: Vec<Value> = serde_json::from_str(&body)?;
        let matches: Vec<RawMatch> = entries.into_iter().map(RawMatch::from_value).collect();

        info!("Fetched {} matches for {}", matches.len(), provider_key);
        Ok(matches)
    }
}
