//! Blackout dates for review scheduling
//!
//! This module provides:
//! - Blackout pattern matching (recurring `MM-DD` and exact `YYYY-MM-DD`)
//! - Bounded forward adjustment of review intervals past blackout dates
//! - Configuration loading and validation

pub mod adjuster;
pub mod config;
pub mod matcher;
pub mod models;

pub use adjuster::{adjust, adjust_detailed, Adjustment};
pub use config::{BlackoutConfig, ConfigError};
pub use matcher::{is_blackout, matching_pattern};
pub use models::PatternKind;
