//! Blackout-aware review scheduling
//!
//! Applies the blackout configuration to the intervals a memory model
//! proposes for each answer rating.

pub mod algorithm;
pub mod models;

pub use algorithm::{due_date, format_interval, BlackoutScheduler};
pub use models::*;
