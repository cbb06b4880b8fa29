//! Blackout-aware scheduling
//!
//! Sits between the memory model, which proposes an interval for each
//! rating, and the host, which commits the chosen due date.

use chrono::{Days, NaiveDate};

use crate::blackout::{adjust_detailed, Adjustment, BlackoutConfig};

use super::models::{AdjustedIntervals, ProposedIntervals, Rating};

/// Applies a fixed blackout configuration to proposed intervals
#[derive(Debug, Clone, Default)]
pub struct BlackoutScheduler {
    config: BlackoutConfig,
}

impl BlackoutScheduler {
    pub fn new(config: BlackoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BlackoutConfig {
        &self.config
    }

    /// Adjust a single interval relative to `today`
    pub fn adjust_interval(&self, interval: u32, today: NaiveDate) -> Adjustment {
        adjust_detailed(
            interval,
            today,
            &self.config.blackout_dates,
            self.config.max_blackout_skip,
        )
    }

    /// Adjust the interval proposed for one rating
    pub fn adjust_rating(&self, rating: Rating, interval: u32, today: NaiveDate) -> Adjustment {
        if !rating.is_adjustable() {
            return adjust_detailed(interval, today, &[], 0);
        }
        self.adjust_interval(interval, today)
    }

    /// Adjust every proposed interval
    pub fn adjust_all(&self, proposed: &ProposedIntervals, today: NaiveDate) -> AdjustedIntervals {
        AdjustedIntervals {
            again: self.adjust_rating(Rating::Again, proposed.again, today),
            hard: self.adjust_rating(Rating::Hard, proposed.hard, today),
            good: self.adjust_rating(Rating::Good, proposed.good, today),
            easy: self.adjust_rating(Rating::Easy, proposed.easy, today),
        }
    }
}

/// Due date for an interval, `None` if it falls outside the calendar
pub fn due_date(today: NaiveDate, interval: u32) -> Option<NaiveDate> {
    today.checked_add_days(Days::new(u64::from(interval)))
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: u32) -> String {
    match days {
        0 => "now".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}
