use crate::models::Bookmaker;

pub const H2H_MARKET: &str = "h2h";

/// Head-to-head prices picked for one match. Any leg may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OddsTriple {
    pub home: Option<f64>,
    pub draw: Option<f64>,
    pub away: Option<f64>,
}

/// Pick the h2h prices from the first bookmaker that quotes an h2h market.
///
/// Outcomes are assigned by position, not by team name: "draw" (any case)
/// is the draw price, the first other outcome is home, the second is away,
/// and anything after that is ignored. Once an h2h market is found no other
/// bookmaker is consulted, even if it left legs empty.
pub fn extract_odds(bookmakers: &[Bookmaker]) -> OddsTriple {
    let Some(market) = bookmakers
        .iter()
        .find_map(|b| b.markets.iter().find(|m| m.key == H2H_MARKET))
    else {
        return OddsTriple::default();
    };

    let mut odds = OddsTriple::default();
    let mut sides_seen = 0;

    for outcome in &market.outcomes {
        if outcome.name.eq_ignore_ascii_case("draw") {
            odds.draw = outcome.price;
            continue;
        }
        match sides_seen {
            0 => odds.home = outcome.price,
            1 => odds.away = outcome.price,
            _ => {}
        }
        sides_seen += 1;
    }

    odds
}
