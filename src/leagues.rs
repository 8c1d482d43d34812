/// A league as named in the snapshot table, plus the proxy's slug for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    pub display_name: &'static str,
    pub provider_key: &'static str,
}

/// Leagues refreshed on every run, in fetch/insert order.
pub const LEAGUES: &[League] = &[
    League { display_name: "EPL", provider_key: "soccer_epl" },
    League { display_name: "LaLiga", provider_key: "soccer_spain_la_liga" },
    League { display_name: "SerieA", provider_key: "soccer_italy_serie_a" },
    League { display_name: "Bundesliga", provider_key: "soccer_germany_bundesliga" },
    League { display_name: "Ligue1", provider_key: "soccer_france_ligue_one" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leagues_keep_insertion_order() {
        let names: Vec<_> = LEAGUES.iter().map(|l| l.display_name).collect();
        assert_eq!(names, ["EPL", "LaLiga", "SerieA", "Bundesliga", "Ligue1"]);
    }

    #[test]
    fn provider_keys_are_unique_soccer_slugs() {
        let mut keys: Vec<_> = LEAGUES.iter().map(|l| l.provider_key).collect();
        assert!(keys.iter().all(|k| k.starts_with("soccer_")));
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), LEAGUES.len());
    }
}
