//! Blackout pattern vocabulary

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Shape of a configured blackout entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    /// `MM-DD`, matches the same day every year
    Recurring,
    /// `YYYY-MM-DD`, matches a single calendar date
    Exact,
    /// Anything else. Kept in the list but can never match.
    Malformed,
}

impl PatternKind {
    /// Classify a pattern by its structure.
    ///
    /// This only inspects digit groups and the month/day ranges. Matching
    /// never goes through here; it is plain string equality against
    /// [`recurring_key`] and [`exact_key`].
    pub fn classify(pattern: &str) -> Self {
        let parts: Vec<&str> = pattern.split('-').collect();
        match parts.as_slice() {
            [month, day] if is_month(month) && is_day(day) => Self::Recurring,
            [year, month, day] if is_year(year) && is_month(month) && is_day(day) => Self::Exact,
            _ => Self::Malformed,
        }
    }

    pub fn is_malformed(self) -> bool {
        self == Self::Malformed
    }
}

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_year(s: &str) -> bool {
    all_digits(s, 4)
}

fn is_month(s: &str) -> bool {
    all_digits(s, 2) && matches!(s.parse::<u32>(), Ok(1..=12))
}

fn is_day(s: &str) -> bool {
    all_digits(s, 2) && matches!(s.parse::<u32>(), Ok(1..=31))
}

/// `MM-DD` form of a date
pub fn recurring_key(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

/// `YYYY-MM-DD` form of a date
pub fn exact_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_recurring() {
        assert_eq!(PatternKind::classify("12-25"), PatternKind::Recurring);
        assert_eq!(PatternKind::classify("02-29"), PatternKind::Recurring);
    }

    #[test]
    fn test_classify_exact() {
        assert_eq!(PatternKind::classify("2025-07-04"), PatternKind::Exact);
    }

    #[test]
    fn test_classify_malformed() {
        assert!(PatternKind::classify("").is_malformed());
        assert!(PatternKind::classify("12/25").is_malformed());
        assert!(PatternKind::classify("1-5").is_malformed());
        assert!(PatternKind::classify("13-01").is_malformed());
        assert!(PatternKind::classify("00-10").is_malformed());
        assert!(PatternKind::classify("12-32").is_malformed());
        assert!(PatternKind::classify("25-07-04").is_malformed());
        assert!(PatternKind::classify("xmas").is_malformed());
        assert!(PatternKind::classify("2025-7-4").is_malformed());
    }

    #[test]
    fn test_keys_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(recurring_key(date), "03-07");
        assert_eq!(exact_key(date), "2026-03-07");
    }

    #[test]
    fn test_exact_key_pads_short_years() {
        let date = NaiveDate::from_ymd_opt(999, 1, 2).unwrap();
        assert_eq!(exact_key(date), "0999-01-02");
    }
}
