//! Interval adjustment around blackout dates
//!
//! Given an interval proposed by the memory model, walk forward one day at a
//! time while `today + interval` is a blackout date. The walk is bounded by
//! the skip budget: at most `max_skip + 1` dates are checked and at most
//! `max_skip` days are added. Running out of budget is not an error, the
//! last interval reached is returned and flagged as exhausted.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::matcher::matching_pattern;

/// Outcome of a single adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    /// Interval proposed by the caller
    pub original: u32,
    /// Interval after skipping blackout dates
    pub interval: u32,
    /// Days added, never more than the budget
    pub skipped: u32,
    /// Budget ran out while `today + interval` is still a blackout date
    pub exhausted: bool,
}

impl Adjustment {
    fn unchanged(interval: u32) -> Self {
        Self {
            original: interval,
            interval,
            skipped: 0,
            exhausted: false,
        }
    }

    pub fn was_shifted(&self) -> bool {
        self.skipped > 0
    }
}

/// Shift `interval` past consecutive blackout dates, spending at most
/// `max_skip` extra days.
pub fn adjust(interval: u32, today: NaiveDate, patterns: &[String], max_skip: u32) -> u32 {
    adjust_detailed(interval, today, patterns, max_skip).interval
}

/// Same as [`adjust`], but also reports how many days were added and whether
/// the budget was exhausted on a blackout date.
pub fn adjust_detailed(
    interval: u32,
    today: NaiveDate,
    patterns: &[String],
    max_skip: u32,
) -> Adjustment {
    if patterns.is_empty() {
        return Adjustment::unchanged(interval);
    }

    for extra in 0..=max_skip {
        let candidate = interval.saturating_add(extra);

        let Some(target) = today.checked_add_days(Days::new(u64::from(candidate))) else {
            log::debug!(
                "Interval {} from {} is outside the calendar range, stopping",
                candidate,
                today
            );
            return Adjustment {
                original: interval,
                interval: candidate,
                skipped: candidate - interval,
                exhausted: false,
            };
        };

        match matching_pattern(target, patterns) {
            None => {
                return Adjustment {
                    original: interval,
                    interval: candidate,
                    skipped: candidate - interval,
                    exhausted: false,
                };
            }
            Some(pattern) => {
                log::debug!("Skipping {} (blackout {})", target, pattern);
            }
        }
    }

    let reached = interval.saturating_add(max_skip);
    log::warn!(
        "Blackout skip budget of {} exhausted: interval {} still lands on a blackout date",
        max_skip,
        reached
    );

    Adjustment {
        original: interval,
        interval: reached,
        skipped: reached - interval,
        exhausted: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackout::models::recurring_key;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    /// Recurring patterns for the given day offsets from `today()`
    fn blackout_days(offsets: impl IntoIterator<Item = u64>) -> Vec<String> {
        offsets
            .into_iter()
            .map(|n| recurring_key(today() + Days::new(n)))
            .collect()
    }

    #[test]
    fn test_no_blackouts_returns_interval() {
        for interval in [0, 1, 5, 30] {
            assert_eq!(adjust(interval, today(), &[], 7), interval);
        }
    }

    #[test]
    fn test_interval_zero() {
        assert_eq!(adjust(0, today(), &[], 7), 0);

        let list = blackout_days([0]);
        assert_eq!(adjust(0, today(), &list, 7), 1);
    }

    #[test]
    fn test_single_blackout_tomorrow() {
        let list = blackout_days([1]);
        assert_eq!(adjust(1, today(), &list, 7), 2);
        assert_eq!(adjust(2, today(), &list, 7), 2);
    }

    #[test]
    fn test_consecutive_blackouts() {
        let list = blackout_days([1, 2, 3]);
        assert_eq!(adjust(1, today(), &list, 7), 4);
        assert_eq!(adjust(2, today(), &list, 7), 4);
        assert_eq!(adjust(3, today(), &list, 7), 4);
        assert_eq!(adjust(4, today(), &list, 7), 4);
    }

    #[test]
    fn test_blackout_not_affecting_interval() {
        let list = blackout_days([5]);
        assert_eq!(adjust(1, today(), &list, 7), 1);
        assert_eq!(adjust(4, today(), &list, 7), 4);
        assert_eq!(adjust(5, today(), &list, 7), 6);
        assert_eq!(adjust(6, today(), &list, 7), 6);
    }

    #[test]
    fn test_budget_exhausted() {
        let list = blackout_days(1..=10);
        let result = adjust_detailed(1, today(), &list, 7);

        assert_eq!(result.interval, 8);
        assert_eq!(result.skipped, 7);
        assert!(result.exhausted);
    }

    #[test]
    fn test_zero_budget_checks_once() {
        let list = blackout_days([1]);
        let result = adjust_detailed(1, today(), &list, 0);

        assert_eq!(result.interval, 1);
        assert!(result.exhausted);
        assert_eq!(adjust(2, today(), &list, 0), 2);
    }

    #[test]
    fn test_last_budget_day_is_free() {
        // Days 1..=7 blocked, budget 7 lands exactly on free day 8
        let list = blackout_days(1..=7);
        let result = adjust_detailed(1, today(), &list, 7);

        assert_eq!(result.interval, 8);
        assert!(!result.exhausted);
    }

    #[test]
    fn test_result_stays_within_budget() {
        let list = blackout_days([2, 3, 4, 7, 8, 9, 10, 11, 12]);
        for interval in 0..20 {
            for max_skip in 0..5 {
                let result = adjust(interval, today(), &list, max_skip);
                assert!(result >= interval);
                assert!(result - interval <= max_skip);
            }
        }
    }

    #[test]
    fn test_unshifted_when_target_is_free() {
        let list = blackout_days([3]);
        let result = adjust_detailed(2, today(), &list, 7);

        assert_eq!(result, Adjustment::unchanged(2));
        assert!(!result.was_shifted());
    }

    #[test]
    fn test_exact_pattern_skips_once() {
        let list = vec!["2025-06-11".to_string()];
        assert_eq!(adjust(1, today(), &list, 7), 2);

        let next_year = NaiveDate::from_ymd_opt(2026, 6, 10).unwrap();
        assert_eq!(adjust(1, next_year, &list, 7), 1);
    }

    #[test]
    fn test_crosses_year_boundary() {
        let dec_30 = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        let list = vec!["12-31".to_string(), "01-01".to_string()];
        assert_eq!(adjust(1, dec_30, &list, 7), 3);
    }

    #[test]
    fn test_calendar_overflow_stops() {
        let list = vec!["01-01".to_string()];
        let result = adjust_detailed(1, NaiveDate::MAX, &list, 7);

        assert_eq!(result.interval, 1);
        assert!(!result.exhausted);
    }
}
