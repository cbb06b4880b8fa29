//! Blackout configuration
//!
//! Loaded once at startup and read-only afterwards. File format:
//! ```toml
//! blackout_dates = ["12-25", "2025-07-04"]
//! max_blackout_skip = 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::PatternKind;

/// Default number of extra days the adjuster may add
pub const DEFAULT_MAX_BLACKOUT_SKIP: u32 = 7;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("max_blackout_skip must not be negative (got {0})")]
    NegativeSkipBudget(i64),

    #[error("max_blackout_skip is too large (got {0})")]
    SkipBudgetTooLarge(i64),

    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Validated blackout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackoutConfig {
    /// `MM-DD` or `YYYY-MM-DD` entries
    pub blackout_dates: Vec<String>,
    /// Maximum extra days added per adjustment
    pub max_blackout_skip: u32,
}

impl Default for BlackoutConfig {
    fn default() -> Self {
        Self {
            blackout_dates: Vec::new(),
            max_blackout_skip: DEFAULT_MAX_BLACKOUT_SKIP,
        }
    }
}

/// On-disk shape, before the budget is range-checked
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default, alias = "blackoutDates")]
    blackout_dates: Vec<String>,
    #[serde(default = "default_max_skip", alias = "maxBlackoutSkip")]
    max_blackout_skip: i64,
}

fn default_max_skip() -> i64 {
    i64::from(DEFAULT_MAX_BLACKOUT_SKIP)
}

impl TryFrom<RawConfig> for BlackoutConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        if raw.max_blackout_skip < 0 {
            return Err(ConfigError::NegativeSkipBudget(raw.max_blackout_skip));
        }
        let max_blackout_skip = u32::try_from(raw.max_blackout_skip)
            .map_err(|_| ConfigError::SkipBudgetTooLarge(raw.max_blackout_skip))?;

        let config = Self {
            blackout_dates: raw.blackout_dates,
            max_blackout_skip,
        };
        config.warn_malformed();
        Ok(config)
    }
}

impl BlackoutConfig {
    pub fn new(blackout_dates: Vec<String>, max_blackout_skip: u32) -> Self {
        Self {
            blackout_dates,
            max_blackout_skip,
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        raw.try_into()
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded {} blackout dates (max skip {}) from {:?}",
            config.blackout_dates.len(),
            config.max_blackout_skip,
            path
        );
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No blackout config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Default location: `<config dir>/blackout-scheduler/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("blackout-scheduler").join("config.toml"))
    }

    /// Structural classification of each configured entry
    pub fn classify_patterns(&self) -> Vec<(&str, PatternKind)> {
        self.blackout_dates
            .iter()
            .map(|p| (p.as_str(), PatternKind::classify(p)))
            .collect()
    }

    /// Entries that can never match any date
    pub fn malformed_patterns(&self) -> Vec<&str> {
        self.classify_patterns()
            .into_iter()
            .filter(|(_, kind)| kind.is_malformed())
            .map(|(p, _)| p)
            .collect()
    }

    fn warn_malformed(&self) {
        for pattern in self.malformed_patterns() {
            log::warn!(
                "Ignoring blackout date {:?}: expected MM-DD or YYYY-MM-DD",
                pattern
            );
        }
    }
}
