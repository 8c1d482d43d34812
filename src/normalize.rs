use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::extract::OddsTriple;
use crate::models::{RawMatch, UpcomingMatch};

/// Why a match was left out of the snapshot.
#[derive(Debug, Error, PartialEq)]
pub enum Rejection {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid commence_time {0:?}")]
    InvalidCommenceTime(String),
}

/// Validate a match and its extracted prices into a table row.
///
/// Team names and the home/away prices are required; the draw price is not.
pub fn normalize_match(
    league: &str,
    raw: &RawMatch,
    odds: OddsTriple,
) -> Result<UpcomingMatch, Rejection> {
    let home_team = present_name(&raw.home_team).ok_or(Rejection::MissingField("home_team"))?;
    let away_team = present_name(&raw.away_team).ok_or(Rejection::MissingField("away_team"))?;
    let home_odds = present_price(odds.home).ok_or(Rejection::MissingField("home_odds"))?;
    let away_odds = present_price(odds.away).ok_or(Rejection::MissingField("away_odds"))?;

    let commence_time = raw.commence_time.as_deref().unwrap_or_default();
    let match_time = parse_commence_time(commence_time)
        .ok_or_else(|| Rejection::InvalidCommenceTime(commence_time.to_string()))?;

    Ok(UpcomingMatch {
        league: league.to_string(),
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        match_time,
        home_odds,
        draw_odds: odds.draw,
        away_odds,
    })
}

/// Parse a provider timestamp. A trailing "Z" is read as "+00:00"; a string
/// with no offset at all is not accepted.
pub fn parse_commence_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let normalized = match raw.strip_suffix('Z') {
        Some(stem) => format!("{}+00:00", stem),
        None => raw.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalized)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn present_name(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|n| !n.is_empty())
}

// A zero price counts as missing.
fn present_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| *p != 0.0)
}
