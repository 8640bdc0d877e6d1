use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// One of the two players on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    PlayerA,
    PlayerB,
}

/// Outcome of a single match, fixed at creation time from the two scores.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
pub enum Winner {
    PlayerA,
    PlayerB,
    Draw,
}

impl Winner {
    /// The winning side, or `None` for a draw.
    pub fn side(self) -> Option<Side> {
        match self {
            Winner::PlayerA => Some(Side::PlayerA),
            Winner::PlayerB => Some(Side::PlayerB),
            Winner::Draw => None,
        }
    }
}

/// A single recorded match between the two players.
///
/// `winner` and `week` are derived from `date` and the scores once, in
/// [`MatchRecord::new`], and stored as-is from then on. `match_number` is the
/// list position guessed at creation time (`count + 1`), not a server-assigned
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub player_a_score: u8,
    pub player_b_score: u8,
    pub winner: Winner,
    pub week: u32,
    pub match_number: u32,
}

impl MatchRecord {
    /// Build a record, deriving `winner` and `week` from the inputs.
    pub fn new(date: NaiveDate, player_a_score: u8, player_b_score: u8, match_number: u32) -> Self {
        let winner = match player_a_score.cmp(&player_b_score) {
            std::cmp::Ordering::Greater => Winner::PlayerA,
            std::cmp::Ordering::Less => Winner::PlayerB,
            std::cmp::Ordering::Equal => Winner::Draw,
        };
        Self {
            date,
            player_a_score,
            player_b_score,
            winner,
            week: week_number(date),
            match_number,
        }
    }

    /// This player's goals in the match.
    pub fn score_of(&self, side: Side) -> u8 {
        match side {
            Side::PlayerA => self.player_a_score,
            Side::PlayerB => self.player_b_score,
        }
    }

    /// Combined goals scored by both players.
    pub fn total_goals(&self) -> u32 {
        u32::from(self.player_a_score) + u32::from(self.player_b_score)
    }
}

/// Week number of a date, using the backend's legacy formula.
///
/// Counts whole days since Jan 1 of the same year, offsets by Jan 1's weekday
/// (Sunday = 0) plus one, and divides by 7 rounding up. This is not ISO-8601
/// week numbering; existing stored records depend on it, so it must not be
/// changed.
pub fn week_number(date: NaiveDate) -> u32 {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let days_since_jan1 = (date - jan1).num_days() as u32;
    let offset = days_since_jan1 + jan1.weekday().num_days_from_sunday() + 1;
    offset.div_ceil(7)
}
