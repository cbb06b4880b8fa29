//! Data models for blackout-aware scheduling

use serde::{Deserialize, Serialize};

use crate::blackout::Adjustment;

/// Answer button pressed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Map UI rating (1-4: Again, Hard, Good, Easy)
    pub fn from_ui(rating: i32) -> Option<Self> {
        match rating {
            1 => Some(Self::Again),
            2 => Some(Self::Hard),
            3 => Some(Self::Good),
            4 => Some(Self::Easy),
            _ => None,
        }
    }

    /// Whether the proposed interval for this rating is moved off blackout
    /// dates. `Again` sends the card back to relearning and is left alone.
    pub fn is_adjustable(self) -> bool {
        !matches!(self, Self::Again)
    }
}

/// Intervals in days proposed by the memory model, one per rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedIntervals {
    pub again: u32,
    pub hard: u32,
    pub good: u32,
    pub easy: u32,
}

impl ProposedIntervals {
    pub fn get(&self, rating: Rating) -> u32 {
        match rating {
            Rating::Again => self.again,
            Rating::Hard => self.hard,
            Rating::Good => self.good,
            Rating::Easy => self.easy,
        }
    }
}

/// Per-rating adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedIntervals {
    pub again: Adjustment,
    pub hard: Adjustment,
    pub good: Adjustment,
    pub easy: Adjustment,
}

impl AdjustedIntervals {
    pub fn get(&self, rating: Rating) -> &Adjustment {
        match rating {
            Rating::Again => &self.again,
            Rating::Hard => &self.hard,
            Rating::Good => &self.good,
            Rating::Easy => &self.easy,
        }
    }

    /// Final intervals in rating order
    pub fn intervals(&self) -> [u32; 4] {
        [
            self.again.interval,
            self.hard.interval,
            self.good.interval,
            self.easy.interval,
        ]
    }

    /// True if any rating ran out of skip budget on a blackout date
    pub fn any_exhausted(&self) -> bool {
        [&self.again, &self.hard, &self.good, &self.easy]
            .iter()
            .any(|a| a.exhausted)
    }
}
