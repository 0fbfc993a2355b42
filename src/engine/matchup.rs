// Head-to-head matchup simulation under the category-majority rule.

use std::collections::HashMap;

use crate::engine::ConfigurationError;
use crate::stats::{Category, StatLine};

// ---------------------------------------------------------------------------
// Single matchup
// ---------------------------------------------------------------------------

/// Outcome of one head-to-head matchup from the home side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchupOutcome {
    HomeWin,
    AwayWin,
    Tie,
}

/// Category points won by each side. A category with exactly equal values
/// awards a point to neither side.
pub fn category_points(home: &StatLine, away: &StatLine) -> (u32, u32) {
    let mut home_points = 0;
    let mut away_points = 0;
    for cat in Category::ALL {
        if home[cat] > away[cat] {
            home_points += 1;
        } else if away[cat] > home[cat] {
            away_points += 1;
        }
    }
    (home_points, away_points)
}

/// Decide a matchup by majority of categories won.
///
/// Each category contributes exactly one point regardless of margin, so the
/// winner is whoever takes more categories, never whoever piles up bigger
/// totals. Equal category counts tie the matchup.
pub fn decide_winner(home: &StatLine, away: &StatLine) -> MatchupOutcome {
    let (home_points, away_points) = category_points(home, away);
    if home_points > away_points {
        MatchupOutcome::HomeWin
    } else if away_points > home_points {
        MatchupOutcome::AwayWin
    } else {
        MatchupOutcome::Tie
    }
}

// ---------------------------------------------------------------------------
// Schedule simulation
// ---------------------------------------------------------------------------

/// Win/tie/loss tally for one team across a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameRecord {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
}

/// Play every matchup in the schedule and tally records for both sides.
///
/// Teams enter the result map with a zeroed record on first appearance, and
/// repeated pairings each count independently. A schedule entry naming a
/// team with no aggregated stats fails the whole call; no partial tally is
/// returned.
pub fn simulate_schedule(
    schedule: &[(String, String)],
    totals: &HashMap<String, StatLine>,
) -> Result<HashMap<String, GameRecord>, ConfigurationError> {
    // Resolve every reference before tallying anything.
    for (home_id, away_id) in schedule {
        for team_id in [home_id, away_id] {
            if !totals.contains_key(team_id) {
                return Err(ConfigurationError::UnknownTeam {
                    team_id: team_id.clone(),
                });
            }
        }
    }

    let mut records: HashMap<String, GameRecord> = HashMap::new();

    for (home_id, away_id) in schedule {
        let outcome = decide_winner(&totals[home_id], &totals[away_id]);

        let home = records.entry(home_id.clone()).or_default();
        match outcome {
            MatchupOutcome::HomeWin => home.wins += 1,
            MatchupOutcome::AwayWin => home.losses += 1,
            MatchupOutcome::Tie => home.ties += 1,
        }

        let away = records.entry(away_id.clone()).or_default();
        match outcome {
            MatchupOutcome::HomeWin => away.losses += 1,
            MatchupOutcome::AwayWin => away.wins += 1,
            MatchupOutcome::Tie => away.ties += 1,
        }
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CATEGORY_COUNT;

    /// Build a stat line from explicit per-category values in natural order:
    /// TOV (already negated), TRB, BLK, STL, PTS, AST, 3P, FG%, FT%.
    fn line(values: [f64; CATEGORY_COUNT]) -> StatLine {
        StatLine::from_values(values)
    }

    fn schedule(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    // Fixture teams with known per-category comparisons.
    //
    // sharks vs bears, category by category:
    //   TOV:  -150 > -180  sharks
    //   TRB:  2400 < 2600  bears
    //   BLK:   200 >  150  sharks
    //   STL:   400 >  350  sharks
    //   PTS:  8000 < 9000  bears
    //   AST:  1800 = 1800  nobody
    //   3P:    600 >  500  sharks
    //   FG%:  0.46 < 0.48  bears
    //   FT%:  0.80 > 0.75  sharks
    // => sharks 5, bears 3, one tied category: sharks win.
    fn sharks() -> StatLine {
        line([-150.0, 2400.0, 200.0, 400.0, 8000.0, 1800.0, 600.0, 0.46, 0.80])
    }

    fn bears() -> StatLine {
        line([-180.0, 2600.0, 150.0, 350.0, 9000.0, 1800.0, 500.0, 0.48, 0.75])
    }

    #[test]
    fn pinned_fixture_category_points() {
        let (home, away) = category_points(&sharks(), &bears());
        assert_eq!(home, 5);
        assert_eq!(away, 3);
    }

    #[test]
    fn pinned_fixture_winner() {
        assert_eq!(decide_winner(&sharks(), &bears()), MatchupOutcome::HomeWin);
        assert_eq!(decide_winner(&bears(), &sharks()), MatchupOutcome::AwayWin);
    }

    #[test]
    fn category_points_conserved() {
        let (home, away) = category_points(&sharks(), &bears());
        let tied = Category::ALL
            .iter()
            .filter(|c| sharks()[**c] == bears()[**c])
            .count() as u32;
        assert_eq!(home + away + tied, CATEGORY_COUNT as u32);
    }

    #[test]
    fn identical_lines_tie() {
        assert_eq!(decide_winner(&sharks(), &sharks()), MatchupOutcome::Tie);
    }

    #[test]
    fn swap_is_complementary() {
        let cases = [
            (sharks(), bears()),
            (sharks(), sharks()),
            (
                line([-10.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.5, 0.5]),
                line([-20.0, 2.0, 1.0, 4.0, 3.0, 6.0, 5.0, 0.5, 0.4]),
            ),
        ];
        for (a, b) in cases {
            let forward = decide_winner(&a, &b);
            let backward = decide_winner(&b, &a);
            match forward {
                MatchupOutcome::HomeWin => assert_eq!(backward, MatchupOutcome::AwayWin),
                MatchupOutcome::AwayWin => assert_eq!(backward, MatchupOutcome::HomeWin),
                MatchupOutcome::Tie => assert_eq!(backward, MatchupOutcome::Tie),
            }
        }
    }

    #[test]
    fn majority_not_magnitude() {
        // away takes four categories by landslides; home takes five by a
        // single unit each. Majority rule: home wins.
        let home = line([-10.0, 101.0, 11.0, 21.0, 501.0, 1.0, 1.0, 0.01, 0.01]);
        let away = line([-11.0, 100.0, 10.0, 20.0, 500.0, 9000.0, 9000.0, 0.99, 0.99]);
        let (home_points, away_points) = category_points(&home, &away);
        assert_eq!((home_points, away_points), (5, 4));
        assert_eq!(decide_winner(&home, &away), MatchupOutcome::HomeWin);
    }

    fn totals(entries: &[(&str, StatLine)]) -> HashMap<String, StatLine> {
        entries
            .iter()
            .map(|(id, l)| (id.to_string(), *l))
            .collect()
    }

    #[test]
    fn schedule_tallies_both_sides() {
        let totals = totals(&[("sharks", sharks()), ("bears", bears())]);
        let records =
            simulate_schedule(&schedule(&[("sharks", "bears")]), &totals).unwrap();

        assert_eq!(records["sharks"], GameRecord { wins: 1, ties: 0, losses: 0 });
        assert_eq!(records["bears"], GameRecord { wins: 0, ties: 0, losses: 1 });
    }

    #[test]
    fn schedule_ties_increment_both() {
        let totals = totals(&[("a", sharks()), ("b", sharks())]);
        let records = simulate_schedule(&schedule(&[("a", "b")]), &totals).unwrap();

        assert_eq!(records["a"].ties, 1);
        assert_eq!(records["b"].ties, 1);
    }

    #[test]
    fn repeated_pairings_each_count() {
        let totals = totals(&[("sharks", sharks()), ("bears", bears())]);
        let records = simulate_schedule(
            &schedule(&[("sharks", "bears"), ("sharks", "bears"), ("bears", "sharks")]),
            &totals,
        )
        .unwrap();

        assert_eq!(records["sharks"].wins, 3);
        assert_eq!(records["bears"].losses, 3);
    }

    #[test]
    fn total_entries_equal_twice_matchup_count() {
        let totals = totals(&[("a", sharks()), ("b", bears()), ("c", sharks())]);
        let sched = schedule(&[("a", "b"), ("b", "c"), ("a", "c"), ("a", "b")]);
        let n = sched.len() as u32;

        let records = simulate_schedule(&sched, &totals).unwrap();

        let entries: u32 = records
            .values()
            .map(|r| r.wins + r.ties + r.losses)
            .sum();
        assert_eq!(entries, 2 * n);
    }

    #[test]
    fn unknown_team_fails_without_partial_result() {
        let totals = totals(&[("a", sharks())]);
        let err =
            simulate_schedule(&schedule(&[("a", "phantom")]), &totals).unwrap_err();
        match err {
            ConfigurationError::UnknownTeam { team_id } => {
                assert_eq!(team_id, "phantom");
            }
            other => panic!("expected UnknownTeam, got: {other}"),
        }
    }

    #[test]
    fn empty_schedule_gives_empty_records() {
        let totals = totals(&[("a", sharks())]);
        let records = simulate_schedule(&[], &totals).unwrap();
        assert!(records.is_empty());
    }
}
