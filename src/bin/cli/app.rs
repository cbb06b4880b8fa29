use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use blackout_lib::blackout::{BlackoutConfig, PatternKind};
use blackout_lib::scheduler::BlackoutScheduler;

/// Shared application state for CLI commands
pub struct App {
    pub config_path: PathBuf,
    pub scheduler: BlackoutScheduler,
}

impl App {
    /// Load configuration and apply command-line overrides
    pub fn new(config_path: Option<&Path>, extra_blackouts: Vec<String>, max_skip: Option<u32>) -> Result<Self> {
        let (config_path, mut config) = match config_path {
            Some(path) => {
                let config = BlackoutConfig::load(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?;
                (path.to_path_buf(), config)
            }
            None => {
                let path = BlackoutConfig::default_path()
                    .context("Failed to get config directory")?;
                let config = BlackoutConfig::load_or_default(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?;
                (path, config)
            }
        };

        for pattern in &extra_blackouts {
            if PatternKind::classify(pattern).is_malformed() {
                log::warn!("Blackout date {:?} will never match", pattern);
            }
        }
        config.blackout_dates.extend(extra_blackouts);

        if let Some(max_skip) = max_skip {
            config.max_blackout_skip = max_skip;
        }

        Ok(Self {
            config_path,
            scheduler: BlackoutScheduler::new(config),
        })
    }

    pub fn config(&self) -> &BlackoutConfig {
        self.scheduler.config()
    }
}

/// Today's date in local time
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
