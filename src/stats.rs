//! Pure aggregation over the match history.
//!
//! Every function here is a derivation over an immutable `&[MatchRecord]`
//! snapshot: no I/O, no state, safe to recompute on every change. All ratios
//! yield 0 instead of dividing by zero.

use itertools::Itertools;

use crate::model::{
    Leader, MatchRecord, OverallStats, PlayerStats, ScorePoint, Side, TrendPoint, WeekSummary,
    WinDistribution, Winner,
};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round1(part as f64 / whole as f64 * 100.0)
    }
}

fn leader(player_a_wins: usize, player_b_wins: usize) -> Leader {
    match player_a_wins.cmp(&player_b_wins) {
        std::cmp::Ordering::Greater => Leader::PlayerA,
        std::cmp::Ordering::Less => Leader::PlayerB,
        std::cmp::Ordering::Equal => Leader::Tie,
    }
}

/// Headline stats: match count, goal totals, and the current leader.
pub fn overall(matches: &[MatchRecord]) -> OverallStats {
    let total_matches = matches.len();
    let total_goals: u32 = matches.iter().map(MatchRecord::total_goals).sum();
    let avg_goals = if total_matches == 0 {
        0.0
    } else {
        round1(f64::from(total_goals) / total_matches as f64)
    };
    let a_wins = matches.iter().filter(|m| m.winner == Winner::PlayerA).count();
    let b_wins = matches.iter().filter(|m| m.winner == Winner::PlayerB).count();
    OverallStats {
        total_matches,
        total_goals,
        avg_goals,
        current_leader: leader(a_wins, b_wins),
    }
}

/// One player's wins/draws/losses/goals, accumulated in a single pass.
pub fn player(matches: &[MatchRecord], side: Side) -> PlayerStats {
    let mut stats = PlayerStats::default();
    for m in matches {
        stats.goals += u32::from(m.score_of(side));
        match m.winner.side() {
            Some(winner) if winner == side => stats.wins += 1,
            Some(_) => stats.losses += 1,
            None => stats.draws += 1,
        }
    }
    stats.win_rate = percent(stats.wins, matches.len());
    stats
}

/// The three outcome counts for pie-style displays; draws counted once.
pub fn win_distribution(matches: &[MatchRecord]) -> WinDistribution {
    let mut dist = WinDistribution {
        player_a_wins: 0,
        player_b_wins: 0,
        draws: 0,
    };
    for m in matches {
        match m.winner {
            Winner::PlayerA => dist.player_a_wins += 1,
            Winner::PlayerB => dist.player_b_wins += 1,
            Winner::Draw => dist.draws += 1,
        }
    }
    dist
}

/// Cumulative win rate after each match, in insertion order.
///
/// Equivalent to recomputing both win rates over every prefix, but done in one
/// pass with running counters.
pub fn trend(matches: &[MatchRecord]) -> Vec<TrendPoint> {
    let mut a_wins = 0;
    let mut b_wins = 0;
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            match m.winner {
                Winner::PlayerA => a_wins += 1,
                Winner::PlayerB => b_wins += 1,
                Winner::Draw => {}
            }
            let played = i + 1;
            TrendPoint {
                match_number: played,
                player_a_win_rate: percent(a_wins, played),
                player_b_win_rate: percent(b_wins, played),
            }
        })
        .collect()
}

/// Both players' goals per match, labelled by position for bar charts.
pub fn score_series(matches: &[MatchRecord]) -> Vec<ScorePoint> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| ScorePoint {
            label: format!("Match {}", i + 1),
            player_a: m.player_a_score,
            player_b: m.player_b_score,
        })
        .collect()
}

/// Matches grouped by their stored week number, newest week first.
///
/// Grouping uses the `week` field as recorded at creation time; it is not
/// re-derived from the date. Matches keep their insertion order inside each
/// bucket.
pub fn weekly(matches: &[MatchRecord]) -> Vec<WeekSummary> {
    let mut weeks: Vec<WeekSummary> = Vec::new();
    for m in matches {
        let idx = match weeks.iter().position(|w| w.week == m.week) {
            Some(idx) => idx,
            None => {
                weeks.push(WeekSummary {
                    week: m.week,
                    player_a_wins: 0,
                    player_b_wins: 0,
                    draws: 0,
                    champion: Leader::Tie,
                    matches: Vec::new(),
                });
                weeks.len() - 1
            }
        };
        let bucket = &mut weeks[idx];
        bucket.matches.push(m.clone());
        match m.winner {
            Winner::PlayerA => bucket.player_a_wins += 1,
            Winner::PlayerB => bucket.player_b_wins += 1,
            Winner::Draw => bucket.draws += 1,
        }
    }
    for week in &mut weeks {
        week.champion = leader(week.player_a_wins, week.player_b_wins);
    }
    weeks
        .into_iter()
        .sorted_by(|a, b| b.week.cmp(&a.week))
        .collect()
}
