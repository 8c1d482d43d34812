use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Odds proxy match record
///
/// Every field reads leniently: a value of the wrong type becomes the
/// field's default instead of failing the match, so junk in a bookmaker or
/// market the extractor never looks at cannot cost us the record.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RawMatch {
    #[serde(deserialize_with = "lenient")]
    pub home_team: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub away_team: Option<String>,
    /// ISO-8601, usually "Z"-suffixed.
    #[serde(deserialize_with = "lenient")]
    pub commence_time: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Bookmaker {
    #[serde(deserialize_with = "lenient_seq")]
    pub markets: Vec<Market>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Market {
    #[serde(deserialize_with = "lenient")]
    pub key: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Outcome {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub price: Option<f64>,
}

impl RawMatch {
    /// Read one array entry from the proxy; anything unreadable is an empty match.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Row of the `upcoming_matches` table
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UpcomingMatch {
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    pub match_time: DateTime<Utc>,
    pub home_odds: f64,
    pub draw_odds: Option<f64>,
    pub away_odds: f64,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// Non-arrays read as empty; bad elements become defaults in place so
// bookmaker and outcome positions are preserved.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}
