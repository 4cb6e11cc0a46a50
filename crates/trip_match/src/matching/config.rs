use serde::{Deserialize, Serialize};

/// Maximum departure-time difference for two trips to be considered.
const DEFAULT_TIME_WINDOW_MINUTES: f64 = 15.0;

/// A sampled point is "near" the other path within this radius.
const DEFAULT_MATCH_THRESHOLD_KM: f64 = 1.0;

/// Minimum fraction of the rider's path that must be covered.
const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.6;

/// Approximate number of points sampled along the reference path.
const DEFAULT_MAX_SAMPLES: usize = 20;

/// Thresholds used by [`TripEvaluator`](super::TripEvaluator).
///
/// Deserializes with defaults for missing fields, so a partial JSON file only
/// overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Departure times further apart than this (inclusive bound) never match.
    pub time_window_minutes: f64,
    /// Proximity radius for point-to-point coverage.
    pub match_threshold_km: f64,
    /// Overlap at or above this declares a match.
    pub overlap_threshold: f64,
    /// Sampling budget along the reference path; 0 behaves like 1.
    pub max_samples: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_window_minutes: DEFAULT_TIME_WINDOW_MINUTES,
            match_threshold_km: DEFAULT_MATCH_THRESHOLD_KM,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl MatchConfig {
    pub fn with_time_window_minutes(mut self, minutes: f64) -> Self {
        self.time_window_minutes = minutes;
        self
    }

    pub fn with_match_threshold_km(mut self, km: f64) -> Self {
        self.match_threshold_km = km;
        self
    }

    pub fn with_overlap_threshold(mut self, threshold: f64) -> Self {
        self.overlap_threshold = threshold;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_thresholds() {
        let config = MatchConfig::default();
        assert_eq!(config.time_window_minutes, 15.0);
        assert_eq!(config.match_threshold_km, 1.0);
        assert_eq!(config.overlap_threshold, 0.6);
        assert_eq!(config.max_samples, 20);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = MatchConfig::default()
            .with_time_window_minutes(30.0)
            .with_max_samples(5);
        assert_eq!(config.time_window_minutes, 30.0);
        assert_eq!(config.max_samples, 5);
        assert_eq!(config.overlap_threshold, 0.6);
    }
}
