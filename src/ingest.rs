// Player season-totals loading and normalization.
//
// Reads basketball-reference-style totals CSVs: one row per player with the
// standard column abbreviations (PTS, TRB, AST, FG, FGA, ...). Columns the
// engine does not score are ignored.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::stats::{PlayerRecord, RawStatLine};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// Season-totals CSV row. Values are f64 because projection sources publish
/// fractional totals; they are rounded to counts on load. Extra columns are
/// silently absorbed via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawTotalsRow {
    Name: String,
    PTS: f64,
    #[serde(alias = "REB")]
    TRB: f64,
    AST: f64,
    BLK: f64,
    STL: f64,
    TOV: f64,
    #[serde(rename = "3P", alias = "3PM")]
    THREES: f64,
    FG: f64,
    FGA: f64,
    FT: f64,
    FTA: f64,
    /// Absorb any extra columns the source includes.
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns true if all given f64 values are finite (not NaN or Infinity).
fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Load player records from any CSV reader. Malformed or non-finite rows are
/// skipped with a warning rather than failing the whole load.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawTotalsRow>() {
        match result {
            Ok(raw) => {
                let values = [
                    raw.PTS, raw.TRB, raw.AST, raw.BLK, raw.STL, raw.TOV, raw.THREES,
                    raw.FG, raw.FGA, raw.FT, raw.FTA,
                ];
                if !all_finite(&values) {
                    warn!("skipping player '{}': non-finite stat value", raw.Name.trim());
                    continue;
                }
                players.push(PlayerRecord {
                    name: raw.Name.trim().to_string(),
                    raw: RawStatLine {
                        turnovers: raw.TOV.round() as u32,
                        rebounds: raw.TRB.round() as u32,
                        blocks: raw.BLK.round() as u32,
                        steals: raw.STL.round() as u32,
                        points: raw.PTS.round() as u32,
                        assists: raw.AST.round() as u32,
                        threes_made: raw.THREES.round() as u32,
                        fg_made: raw.FG.round() as u32,
                        fg_attempted: raw.FGA.round() as u32,
                        ft_made: raw.FT.round() as u32,
                        ft_attempted: raw.FTA.round() as u32,
                    },
                });
            }
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
            }
        }
    }
    Ok(players)
}

/// Load player records from a totals CSV file.
pub fn load_players(path: &Path) -> Result<Vec<PlayerRecord>, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_players_from_reader(file).map_err(|e| IngestError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
