use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::TripMatchError;
use crate::overlap::OverlapEstimator;
use crate::path::Path;
use crate::trip::{Role, TripIntent, TripRecord};

use super::algorithm::TripMatcher;
use super::config::MatchConfig;
use super::types::{MatchVerdict, MismatchReason};

/// Absolute difference between two departure times, in fractional minutes.
pub fn departure_gap_minutes(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    a.signed_duration_since(b).num_milliseconds().abs() as f64 / 60_000.0
}

/// Decides whether a rider request and a driver offer should be surfaced to
/// each other.
///
/// Checks run in order and stop at the first failure:
///
/// 1. Departure times within `time_window_minutes`
/// 2. Complementary roles (one rider, one driver)
/// 3. Coverage of the rider's path by the driver's path at or above
///    `overlap_threshold`
///
/// The rider's path is always the sampled reference, whichever side of the
/// call it is on: the question is whether the driver's route covers the
/// rider's, not the reverse.
#[derive(Debug, Clone, Default)]
pub struct TripEvaluator {
    config: MatchConfig,
}

impl TripEvaluator {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn within_time_window(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        departure_gap_minutes(a, b) <= self.config.time_window_minutes
    }

    pub fn evaluate(&self, mine: &TripIntent, other: &TripIntent) -> MatchVerdict {
        if !self.within_time_window(mine.departure_time, other.departure_time) {
            debug!(
                mine = ?mine.id,
                other = ?other.id,
                gap_minutes = departure_gap_minutes(mine.departure_time, other.departure_time),
                "departure times outside window"
            );
            return MatchVerdict::rejected(MismatchReason::TimeMismatch);
        }

        let (rider_path, driver_path): (&Path, &Path) = match (mine.role, other.role) {
            (Role::Rider, Role::Driver) => (&mine.path, &other.path),
            (Role::Driver, Role::Rider) => (&other.path, &mine.path),
            (Role::Rider, Role::Rider) | (Role::Driver, Role::Driver) => {
                debug!(mine = ?mine.id, other = ?other.id, role = %mine.role, "same role");
                return MatchVerdict::rejected(MismatchReason::SameRole);
            }
        };

        let overlap = OverlapEstimator::from(&self.config)
            .estimate(rider_path.points(), driver_path.points());
        let verdict = self.verdict_for_overlap(overlap);
        debug!(
            mine = ?mine.id,
            other = ?other.id,
            overlap,
            matched = verdict.is_match(),
            "trip pair evaluated"
        );
        verdict
    }

    /// Evaluate two stored records, decoding their paths only once the time
    /// window has passed. A time mismatch never touches the decoder.
    pub fn evaluate_records(
        &self,
        mine: &TripRecord,
        other: &TripRecord,
    ) -> Result<MatchVerdict, TripMatchError> {
        if !self.within_time_window(mine.departure_time, other.departure_time) {
            return Ok(MatchVerdict::rejected(MismatchReason::TimeMismatch));
        }
        let mine = mine.resolve()?;
        let other = other.resolve()?;
        Ok(self.evaluate(&mine, &other))
    }

    fn verdict_for_overlap(&self, overlap: f64) -> MatchVerdict {
        if overlap >= self.config.overlap_threshold {
            MatchVerdict::Matched {
                overlap_score: overlap,
            }
        } else {
            MatchVerdict::NotMatched {
                reason: MismatchReason::InsufficientOverlap,
                overlap_score: Some(overlap),
            }
        }
    }
}

impl TripMatcher for TripEvaluator {
    fn evaluate(&self, mine: &TripIntent, other: &TripIntent) -> MatchVerdict {
        TripEvaluator::evaluate(self, mine, other)
    }
}
