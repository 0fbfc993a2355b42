// League configuration loading and parsing (league.toml).

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::stats::Category;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[league]` table in league.toml.
#[derive(Debug, Clone, Deserialize)]
struct LeagueFile {
    league: LeagueConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    /// Scored category keys ("PTS", "TRB", ...). Empty or omitted means all
    /// nine categories in natural order.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Team id -> ordered roster of player names.
    pub rosters: HashMap<String, Vec<String>>,
    /// Head-to-head pairings, in play order. Repeated pairings are allowed
    /// (a season plays the same opponents many weeks).
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    pub home: String,
    pub away: String,
}

impl LeagueConfig {
    /// Resolve the configured category keys. Callers get the full natural
    /// order when no selection was configured.
    ///
    /// Unknown keys are rejected at load time, so this resolution is total
    /// for any config obtained through `load_league_from`.
    pub fn selected_categories(&self) -> Vec<Category> {
        if self.categories.is_empty() {
            return Category::ALL.to_vec();
        }
        self.categories
            .iter()
            .filter_map(|key| Category::from_stat_key(key))
            .collect()
    }

    /// The schedule as (home, away) id pairs.
    pub fn schedule_pairs(&self) -> Vec<(String, String)> {
        self.schedule
            .iter()
            .map(|entry| (entry.home.clone(), entry.away.clone()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate a league definition from the given league.toml path.
pub fn load_league_from(path: &Path) -> Result<LeagueConfig, ConfigError> {
    let text = read_file(path)?;
    let file: LeagueFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let league = file.league;

    validate(&league)?;

    Ok(league)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(league: &LeagueConfig) -> Result<(), ConfigError> {
    if league.rosters.len() < 2 {
        return Err(ConfigError::ValidationError {
            field: "league.rosters".into(),
            message: format!(
                "must define at least two teams, got {}",
                league.rosters.len()
            ),
        });
    }

    for (team_id, roster) in &league.rosters {
        if roster.is_empty() {
            return Err(ConfigError::ValidationError {
                field: format!("league.rosters.{team_id}"),
                message: "roster must not be empty".into(),
            });
        }
    }

    for key in &league.categories {
        if Category::from_stat_key(key).is_none() {
            return Err(ConfigError::ValidationError {
                field: "league.categories".into(),
                message: format!("unknown category key `{key}`"),
            });
        }
    }

    for entry in &league.schedule {
        for team_id in [&entry.home, &entry.away] {
            if !league.rosters.contains_key(team_id) {
                return Err(ConfigError::ValidationError {
                    field: "league.schedule".into(),
                    message: format!("schedule references undefined team `{team_id}`"),
                });
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
