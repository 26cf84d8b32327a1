use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::is_day_before;

pub const MIN_GRADE: u8 = 3;
pub const MAX_GRADE: u8 = 9;
pub const MAX_SCORE: u8 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreRecord {
    pub date: NaiveDate,
    pub score: u8, // percentage
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub username: String,
    pub grade: u8,
    pub streak: u32,
    pub last_played_date: Option<NaiveDate>,
    #[serde(default)]
    pub scores: Vec<ScoreRecord>,
    pub highest_score: u8,
}

impl Student {
    pub fn new(username: &str, grade: u8) -> Self {
        Student {
            username: username.to_string(),
            grade,
            streak: 0,
            last_played_date: None,
            scores: Vec::new(),
            highest_score: 0,
        }
    }

    pub fn has_played_on(&self, day: NaiveDate) -> bool {
        self.last_played_date == Some(day)
    }

    /// Forfeits the streak when the last round is neither today nor yesterday.
    /// Returns whether the record changed.
    pub fn decay_streak(&mut self, today: NaiveDate) -> bool {
        let Some(last) = self.last_played_date else {
            return false;
        };

        if last == today || is_day_before(last, today) || self.streak == 0 {
            return false;
        }

        self.streak = 0;
        true
    }

    /// Applies a completed round played on `today`.
    pub fn record_round(&mut self, today: NaiveDate, score: u8) {
        self.streak = match self.last_played_date {
            None => 1,
            Some(last) if is_day_before(last, today) => self.streak.saturating_add(1),
            Some(last) if last != today => 1,
            Some(_) => self.streak,
        };

        self.last_played_date = Some(today);
        self.scores.push(ScoreRecord { date: today, score });

        if score > self.highest_score {
            self.highest_score = score;
        }
    }
}

#[cfg(test)]
impl Student {
    pub fn with_history(
        username: &str,
        grade: u8,
        streak: u32,
        last_played_date: Option<NaiveDate>,
        scores: &[(NaiveDate, u8)],
    ) -> Self {
        let scores: Vec<ScoreRecord> = scores
            .iter()
            .map(|(date, score)| ScoreRecord {
                date: *date,
                score: *score,
            })
            .collect();
        let highest_score = scores.iter().map(|s| s.score).max().unwrap_or(0);

        Student {
            username: username.to_string(),
            grade,
            streak,
            last_played_date,
            scores,
            highest_score,
        }
    }
}
