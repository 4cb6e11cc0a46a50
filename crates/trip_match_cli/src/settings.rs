//! Match thresholds layered from defaults, an optional JSON file, then flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;
use trip_match::MatchConfig;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON file with match thresholds; missing fields keep their defaults
    #[arg(long, global = true, env = "TRIP_MATCH_CONFIG")]
    pub config: Option<PathBuf>,
    /// Maximum departure-time difference in minutes
    #[arg(long, global = true, env = "TRIP_MATCH_TIME_WINDOW_MINUTES")]
    pub time_window_minutes: Option<f64>,
    /// Proximity radius in kilometres for path coverage
    #[arg(long, global = true, env = "TRIP_MATCH_THRESHOLD_KM")]
    pub match_threshold_km: Option<f64>,
    /// Minimum overlap fraction (0-1) required to match
    #[arg(long, global = true, env = "TRIP_MATCH_OVERLAP_THRESHOLD")]
    pub overlap_threshold: Option<f64>,
    /// Approximate number of points sampled along the rider's path
    #[arg(long, global = true, env = "TRIP_MATCH_MAX_SAMPLES")]
    pub max_samples: Option<usize>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<MatchConfig> {
        let base = match &self.config {
            Some(path) => read_config(path)?,
            None => MatchConfig::default(),
        };
        let config = self.apply_overrides(base);
        debug!(?config, "match config resolved");
        Ok(config)
    }

    fn apply_overrides(&self, mut config: MatchConfig) -> MatchConfig {
        if let Some(minutes) = self.time_window_minutes {
            config.time_window_minutes = minutes;
        }
        if let Some(km) = self.match_threshold_km {
            config.match_threshold_km = km;
        }
        if let Some(threshold) = self.overlap_threshold {
            config.overlap_threshold = threshold;
        }
        if let Some(max_samples) = self.max_samples {
            config.max_samples = max_samples;
        }
        config
    }
}

fn read_config(path: &Path) -> Result<MatchConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}
