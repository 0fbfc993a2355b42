// Percentile ranking under a per-category normality assumption.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::engine::InputError;
use crate::stats::{Category, StatLine};

// ---------------------------------------------------------------------------
// Column statistics
// ---------------------------------------------------------------------------

/// Mean and standard deviation for one category column across the player
/// population.
#[derive(Debug, Clone, Copy)]
pub struct ColumnStats {
    pub mean: f64,
    pub stdev: f64,
}

/// Threshold below which standard deviation is treated as zero.
const STDEV_EPSILON: f64 = 1e-9;

/// Compute mean and standard deviation for a column of values.
///
/// Uses the population standard deviation (N denominator): the table is the
/// full relevant player universe, not a sample. Returns zeros for an empty
/// column.
pub fn column_stats(values: &[f64]) -> ColumnStats {
    if values.is_empty() {
        return ColumnStats {
            mean: 0.0,
            stdev: 0.0,
        };
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    ColumnStats {
        mean,
        stdev: variance.sqrt(),
    }
}

/// Percentile of a value within its column, assuming the column is normally
/// distributed: `Phi((value - mean) / stdev)`.
///
/// A column with (near-)zero spread makes every player indistinguishable, so
/// everyone scores 0.5 rather than hitting a division by zero.
pub fn percentile(value: f64, stats: &ColumnStats) -> f64 {
    if stats.stdev < STDEV_EPSILON {
        return 0.5;
    }
    let normal = Normal::standard();
    normal.cdf((value - stats.mean) / stats.stdev)
}

// ---------------------------------------------------------------------------
// Player value ranking
// ---------------------------------------------------------------------------

/// A player's overall value: the mean of their per-category percentiles.
#[derive(Debug, Clone)]
pub struct PlayerValue {
    pub name: String,
    pub value: f64,
}

/// Resolve a category selection: an empty selection means all nine in
/// natural order.
fn resolve_selection(categories: &[Category]) -> Vec<Category> {
    if categories.is_empty() {
        Category::ALL.to_vec()
    } else {
        categories.to_vec()
    }
}

/// Per-player percentile scores for each selected category, in selection
/// order, keyed by the table's iteration order.
///
/// Exposed for callers that want the per-category breakdown behind
/// `rank_players`.
pub fn percentile_table(
    table: &[(String, StatLine)],
    categories: &[Category],
) -> Result<Vec<(String, Vec<f64>)>, InputError> {
    if table.is_empty() {
        return Err(InputError::EmptyPlayerTable);
    }
    let selection = resolve_selection(categories);

    let mut scores: Vec<(String, Vec<f64>)> = table
        .iter()
        .map(|(name, _)| (name.clone(), Vec::with_capacity(selection.len())))
        .collect();

    for cat in &selection {
        let column: Vec<f64> = table.iter().map(|(_, line)| line[*cat]).collect();
        let stats = column_stats(&column);
        for (entry, value) in scores.iter_mut().zip(column.iter()) {
            entry.1.push(percentile(*value, &stats));
        }
    }

    Ok(scores)
}

/// Rank all players by their average percentile across the selected
/// categories, descending.
///
/// The sort is stable: players with equal value keep their input order.
pub fn rank_players(
    table: &[(String, StatLine)],
    categories: &[Category],
) -> Result<Vec<PlayerValue>, InputError> {
    let scores = percentile_table(table, categories)?;

    let mut values: Vec<PlayerValue> = scores
        .into_iter()
        .map(|(name, percentiles)| {
            let value = percentiles.iter().sum::<f64>() / percentiles.len() as f64;
            PlayerValue { name, value }
        })
        .collect();

    values.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));

    Ok(values)
}

/// The top `n` entries of a ranked value table. `n` larger than the table
/// returns the whole table.
pub fn top_players(values: &[PlayerValue], n: usize) -> Vec<PlayerValue> {
    values.iter().take(n).cloned().collect()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
