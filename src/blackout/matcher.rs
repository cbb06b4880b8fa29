//! Blackout date matching
//!
//! A date is blacked out when its `MM-DD` or `YYYY-MM-DD` rendering is
//! string-equal to a configured entry. No range or fuzzy matching.

use chrono::NaiveDate;

use super::models::{exact_key, recurring_key};

/// Check whether `date` falls on a blackout date
pub fn is_blackout(date: NaiveDate, patterns: &[String]) -> bool {
    matching_pattern(date, patterns).is_some()
}

/// Return the first configured entry that blacks out `date`, if any
pub fn matching_pattern(date: NaiveDate, patterns: &[String]) -> Option<&str> {
    if patterns.is_empty() {
        return None;
    }

    let mmdd = recurring_key(date);
    let full = exact_key(date);

    patterns
        .iter()
        .map(String::as_str)
        .find(|p| *p == mmdd || *p == full)
}
