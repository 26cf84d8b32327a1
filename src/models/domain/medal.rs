use serde::Serialize;

use crate::constants::game::{BRONZE_MEDAL_STREAK, GOLD_MEDAL_STREAK, SILVER_MEDAL_STREAK};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Bronze, Medal::Silver, Medal::Gold];

    pub fn goal(self) -> u32 {
        match self {
            Medal::Bronze => BRONZE_MEDAL_STREAK,
            Medal::Silver => SILVER_MEDAL_STREAK,
            Medal::Gold => GOLD_MEDAL_STREAK,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedalProgress {
    pub medal: Medal,
    pub goal: u32,
    pub earned: bool,
    pub progress_percent: u8,
}

impl MedalProgress {
    pub fn for_streak(medal: Medal, streak: u32) -> Self {
        let goal = medal.goal();
        let percent = (u64::from(streak) * 100 / u64::from(goal)).min(100);

        Self {
            medal,
            goal,
            earned: streak >= goal,
            progress_percent: percent as u8,
        }
    }

    pub fn all_for_streak(streak: u32) -> Vec<Self> {
        Medal::ALL
            .iter()
            .map(|medal| Self::for_streak(*medal, streak))
            .collect()
    }
}
