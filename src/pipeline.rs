use anyhow::Result;
use tracing::{debug, info, warn};

use crate::extract::extract_odds;
use crate::fetcher::OddsFetcher;
use crate::leagues::League;
use crate::models::{RawMatch, UpcomingMatch};
use crate::normalize::normalize_match;
use crate::store::SnapshotStore;

#[derive(Debug, Clone, PartialEq)]
pub enum LeagueResult {
    Inserted { inserted: usize, dropped: usize },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueOutcome {
    pub league: &'static str,
    pub result: LeagueResult,
}

/// Outcome of one full refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshReport {
    pub leagues: Vec<LeagueOutcome>,
    pub inserted: usize,
}

impl RefreshReport {
    pub fn failed_leagues(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.leagues.iter().filter_map(|l| match &l.result {
            LeagueResult::Failed(e) => Some((l.league, e.as_str())),
            LeagueResult::Inserted { .. } => None,
        })
    }
}

/// Replace the stored snapshot with freshly fetched odds.
///
/// The previous snapshot is cleared first and committed on its own, then
/// each league is fetched and written in order. A league whose fetch fails
/// is skipped; a match that fails validation is dropped. Store errors abort
/// the run, leaving whatever leagues were already committed.
pub async fn refresh_upcoming_matches<S: SnapshotStore>(
    fetcher: &OddsFetcher,
    store: &mut S,
    leagues: &[League],
) -> Result<RefreshReport> {
    refresh_upcoming_matches_with(fetcher, store, leagues, |_| {}).await
}

/// Same as [`refresh_upcoming_matches`], calling `on_league` as soon as each
/// league is committed or skipped.
pub async fn refresh_upcoming_matches_with<S, F>(
    fetcher: &OddsFetcher,
    store: &mut S,
    leagues: &[League],
    mut on_league: F,
) -> Result<RefreshReport>
where
    S: SnapshotStore,
    F: FnMut(&LeagueOutcome),
{
    info!("Starting upcoming matches update...");

    let cleared = store.clear_all().await?;
    debug!("Cleared {} rows from previous snapshot", cleared);

    let mut report = RefreshReport::default();

    for league in leagues {
        info!("=== {} ===", league.display_name);

        let matches = match fetcher.fetch_league(league.provider_key).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("FAILED {}: {}", league.display_name, e);
                let outcome = LeagueOutcome {
                    league: league.display_name,
                    result: LeagueResult::Failed(e.to_string()),
                };
                on_league(&outcome);
                report.leagues.push(outcome);
                continue;
            }
        };

        let rows = normalize_league(league.display_name, &matches);
        let dropped = matches.len() - rows.len();
        let inserted = store.write_league(&rows).await?;

        info!(
            "{}: inserted {} matches ({} dropped)",
            league.display_name, inserted, dropped
        );
        report.inserted += inserted;
        let outcome = LeagueOutcome {
            league: league.display_name,
            result: LeagueResult::Inserted { inserted, dropped },
        };
        on_league(&outcome);
        report.leagues.push(outcome);
    }

    info!("TOTAL INSERTED: {}", report.inserted);
    Ok(report)
}

fn normalize_league(league: &str, matches: &[RawMatch]) -> Vec<UpcomingMatch> {
    matches
        .iter()
        .filter_map(|m| {
            let odds = extract_odds(&m.bookmakers);
            match normalize_match(league, m, odds) {
                Ok(row) => Some(row),
                Err(reason) => {
                    debug!(
                        "Dropping {} match {:?} vs {:?}: {}",
                        league, m.home_team, m.away_team, reason
                    );
                    None
                }
            }
        })
        .collect()
}
