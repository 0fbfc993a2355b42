// Analysis engine: team aggregation, percentile ranking, matchup simulation.

pub mod aggregate;
pub mod matchup;
pub mod percentile;

use thiserror::Error;

/// The supplied player table is unusable as a population.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("player table is empty: no population to compute statistics over")]
    EmptyPlayerTable,
}

/// A roster or schedule reference cannot be resolved against the supplied
/// lookup tables.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("roster for team `{team_id}` resolves to zero known players")]
    UnresolvedRoster { team_id: String },

    #[error("schedule references team `{team_id}` with no aggregated stats")]
    UnknownTeam { team_id: String },
}
