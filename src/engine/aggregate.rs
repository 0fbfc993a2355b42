// Roster aggregation: player totals -> team totals.

use std::collections::HashMap;

use tracing::warn;

use crate::engine::ConfigurationError;
use crate::stats::{RawStatLine, StatLine};

/// Sum a roster's raw stat lines into one team line and reduce it.
///
/// Roster names missing from `players` are skipped (a roster may reference
/// players the stat table never saw, e.g. rookies without totals); only a
/// roster resolving to zero known players is an error. Percentage categories
/// come out of the reduction of the summed makes/attempts, never from
/// averaging per-player percentages.
pub fn aggregate_team(
    team_id: &str,
    roster: &[String],
    players: &HashMap<String, RawStatLine>,
) -> Result<StatLine, ConfigurationError> {
    let mut total = RawStatLine::default();
    let mut resolved = 0usize;

    for name in roster {
        match players.get(name) {
            Some(raw) => {
                total = total.add(raw);
                resolved += 1;
            }
            None => {
                warn!("team `{team_id}`: no stats for roster player '{name}', skipping");
            }
        }
    }

    if resolved == 0 {
        return Err(ConfigurationError::UnresolvedRoster {
            team_id: team_id.to_string(),
        });
    }

    Ok(StatLine::from_raw(&total))
}

/// Aggregate every roster into its team stat line.
///
/// The result carries every team id from the input; any unresolvable roster
/// fails the whole call rather than producing a partial mapping.
pub fn aggregate_all_teams(
    rosters: &HashMap<String, Vec<String>>,
    players: &HashMap<String, RawStatLine>,
) -> Result<HashMap<String, StatLine>, ConfigurationError> {
    let mut totals = HashMap::with_capacity(rosters.len());
    for (team_id, roster) in rosters {
        let line = aggregate_team(team_id, roster, players)?;
        totals.insert(team_id.clone(), line);
    }
    Ok(totals)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
