// Statistical category model and per-player stat lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The nine scored categories of a head-to-head category league, in their
/// natural scoring order.
///
/// `Turnovers` is scored negated (fewer turnovers is better), so every
/// category value obeys "higher is better". `FieldGoalPct` and
/// `FreeThrowPct` are derived from makes/attempts during reduction rather
/// than carried as raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Turnovers,
    Rebounds,
    Blocks,
    Steals,
    Points,
    Assists,
    ThreesMade,
    FieldGoalPct,
    FreeThrowPct,
}

/// Number of scored categories.
pub const CATEGORY_COUNT: usize = 9;

impl Category {
    /// All categories in natural scoring order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Turnovers,
        Category::Rebounds,
        Category::Blocks,
        Category::Steals,
        Category::Points,
        Category::Assists,
        Category::ThreesMade,
        Category::FieldGoalPct,
        Category::FreeThrowPct,
    ];

    /// Parse a stat key (basketball-reference style abbreviation) into a
    /// category.
    pub fn from_stat_key(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TOV" => Some(Category::Turnovers),
            "TRB" | "REB" => Some(Category::Rebounds),
            "BLK" => Some(Category::Blocks),
            "STL" => Some(Category::Steals),
            "PTS" => Some(Category::Points),
            "AST" => Some(Category::Assists),
            "3P" | "3PM" => Some(Category::ThreesMade),
            "FG%" => Some(Category::FieldGoalPct),
            "FT%" => Some(Category::FreeThrowPct),
            _ => None,
        }
    }

    /// Return the display abbreviation for this category.
    pub fn stat_key(&self) -> &'static str {
        match self {
            Category::Turnovers => "TOV",
            Category::Rebounds => "TRB",
            Category::Blocks => "BLK",
            Category::Steals => "STL",
            Category::Points => "PTS",
            Category::Assists => "AST",
            Category::ThreesMade => "3P",
            Category::FieldGoalPct => "FG%",
            Category::FreeThrowPct => "FT%",
        }
    }

    /// Position of this category in `Category::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Category::Turnovers => 0,
            Category::Rebounds => 1,
            Category::Blocks => 2,
            Category::Steals => 3,
            Category::Points => 4,
            Category::Assists => 5,
            Category::ThreesMade => 6,
            Category::FieldGoalPct => 7,
            Category::FreeThrowPct => 8,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stat_key())
    }
}

// ---------------------------------------------------------------------------
// Raw season totals
// ---------------------------------------------------------------------------

/// Raw season counting totals for one player (or one team, once summed).
///
/// Shooting percentages are intentionally absent: they are derived from the
/// makes/attempts pairs at reduction time, so summing lines across a roster
/// stays a plain elementwise addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawStatLine {
    pub turnovers: u32,
    pub rebounds: u32,
    pub blocks: u32,
    pub steals: u32,
    pub points: u32,
    pub assists: u32,
    pub threes_made: u32,
    pub fg_made: u32,
    pub fg_attempted: u32,
    pub ft_made: u32,
    pub ft_attempted: u32,
}

impl RawStatLine {
    /// Elementwise sum of two stat lines. Addition is commutative and
    /// associative, so roster totals are independent of player order.
    pub fn add(&self, other: &RawStatLine) -> RawStatLine {
        RawStatLine {
            turnovers: self.turnovers + other.turnovers,
            rebounds: self.rebounds + other.rebounds,
            blocks: self.blocks + other.blocks,
            steals: self.steals + other.steals,
            points: self.points + other.points,
            assists: self.assists + other.assists,
            threes_made: self.threes_made + other.threes_made,
            fg_made: self.fg_made + other.fg_made,
            fg_attempted: self.fg_attempted + other.fg_attempted,
            ft_made: self.ft_made + other.ft_made,
            ft_attempted: self.ft_attempted + other.ft_attempted,
        }
    }
}

/// A named player with raw season totals. The name is the identity key;
/// uniqueness across the player universe is assumed, not enforced.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub name: String,
    pub raw: RawStatLine,
}

// ---------------------------------------------------------------------------
// Reduced per-category values
// ---------------------------------------------------------------------------

/// One comparable value per scored category, indexed by `Category`.
///
/// Turnovers enter negated and the two percentage categories are derived
/// from made/attempted, so a strictly greater value always means a better
/// showing in that category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatLine {
    values: [f64; CATEGORY_COUNT],
}

impl StatLine {
    /// Reduce raw totals to per-category values.
    ///
    /// The four makes/attempts counts collapse into the two derived
    /// percentages; a zero attempted count yields a percentage of exactly
    /// 0.0 rather than an error or NaN.
    pub fn from_raw(raw: &RawStatLine) -> StatLine {
        StatLine {
            values: [
                -(raw.turnovers as f64),
                raw.rebounds as f64,
                raw.blocks as f64,
                raw.steals as f64,
                raw.points as f64,
                raw.assists as f64,
                raw.threes_made as f64,
                ratio(raw.fg_made, raw.fg_attempted),
                ratio(raw.ft_made, raw.ft_attempted),
            ],
        }
    }

    /// Build a stat line directly from per-category values, in
    /// `Category::ALL` order. Intended for tests and callers that already
    /// hold reduced values.
    pub fn from_values(values: [f64; CATEGORY_COUNT]) -> StatLine {
        StatLine { values }
    }

    /// The value for one category.
    pub fn value(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    /// All values in `Category::ALL` order.
    pub fn values(&self) -> &[f64; CATEGORY_COUNT] {
        &self.values
    }
}

impl Index<Category> for StatLine {
    type Output = f64;

    fn index(&self, category: Category) -> &f64 {
        &self.values[category.index()]
    }
}

/// made/attempted, or 0.0 when nothing was attempted.
fn ratio(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        made as f64 / attempted as f64
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
