//! Upcoming Matches Updater
//!
//! Pulls head-to-head odds for a fixed set of soccer leagues from the odds
//! proxy and replaces the `upcoming_matches` table with a fresh snapshot.
//! Shared by the batch binary and the HTTP trigger.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod leagues;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::Config;
pub use pipeline::{
    refresh_upcoming_matches, refresh_upcoming_matches_with, LeagueOutcome, LeagueResult,
    RefreshReport,
};
