// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod config;
pub mod engine;
pub mod ingest;
pub mod stats;

pub use engine::aggregate::{aggregate_all_teams, aggregate_team};
pub use engine::matchup::{decide_winner, simulate_schedule, GameRecord, MatchupOutcome};
pub use engine::percentile::{rank_players, PlayerValue};
pub use engine::{ConfigurationError, InputError};
pub use stats::{Category, PlayerRecord, RawStatLine, StatLine};
