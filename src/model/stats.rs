use serde::Serialize;

use super::match_record::MatchRecord;

/// Who currently leads the scoreboard on win count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum Leader {
    PlayerA,
    PlayerB,
    Tie,
}

/// Headline numbers for the whole match history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    pub total_matches: usize,
    pub total_goals: u32,
    /// Goals per match, one decimal; 0 when no matches have been played.
    pub avg_goals: f64,
    pub current_leader: Leader,
}

/// One player's record across the whole match history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct PlayerStats {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub goals: u32,
    /// Wins over matches played as a percentage, one decimal; 0 with no matches.
    pub win_rate: f64,
}

/// Win counts split into the three outcome categories (draws counted once).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinDistribution {
    pub player_a_wins: usize,
    pub player_b_wins: usize,
    pub draws: usize,
}

/// Cumulative win rates after each match, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    /// 1-based position in the match history.
    pub match_number: usize,
    pub player_a_win_rate: f64,
    pub player_b_win_rate: f64,
}

/// Both players' goals in one match, labelled for per-match charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorePoint {
    pub label: String,
    pub player_a: u8,
    pub player_b: u8,
}

/// One week's worth of matches and who came out on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    pub week: u32,
    pub player_a_wins: usize,
    pub player_b_wins: usize,
    pub draws: usize,
    pub champion: Leader,
    /// The week's matches in their original insertion order.
    pub matches: Vec<MatchRecord>,
}
