//! Path-overlap estimation: what fraction of one path lies near another.
//!
//! Proximity is point-to-point, not point-to-segment. Dense paths make this
//! adequate; sparse comparison paths under-report coverage.

use tracing::trace;

use crate::geo::{distance_km, GeoPoint};
use crate::matching::MatchConfig;

/// Stride used to sample a path of `len` points down to roughly `max_samples`.
///
/// Paths with at most `max_samples` points are sampled in full. A
/// `max_samples` of 0 is treated as 1.
pub fn sample_stride(len: usize, max_samples: usize) -> usize {
    (len / max_samples.max(1)).max(1)
}

/// Number of points actually sampled for a path of `len` points.
///
/// Not always exactly `max_samples`: 45 points at 20 samples gives stride 2
/// and 23 samples.
pub fn sample_count(len: usize, max_samples: usize) -> usize {
    let stride = sample_stride(len, max_samples);
    len.div_ceil(stride)
}

/// True if any point of `path` lies within `threshold_km` of `point`.
pub fn is_point_near_path(point: &GeoPoint, path: &[GeoPoint], threshold_km: f64) -> bool {
    path.iter()
        .any(|candidate| distance_km(*point, *candidate) <= threshold_km)
}

/// Fraction in `[0, 1]` of sampled points of `from` that lie near `to`.
///
/// An empty `from` yields 0; an empty `to` covers nothing and also yields 0.
pub fn overlap_fraction(
    from: &[GeoPoint],
    to: &[GeoPoint],
    threshold_km: f64,
    max_samples: usize,
) -> f64 {
    if from.is_empty() {
        return 0.0;
    }

    let stride = sample_stride(from.len(), max_samples);
    let (sampled, covered) = from
        .iter()
        .step_by(stride)
        .fold((0usize, 0usize), |(sampled, covered), point| {
            let near = is_point_near_path(point, to, threshold_km);
            (sampled + 1, covered + usize::from(near))
        });

    trace!(
        from_len = from.len(),
        to_len = to.len(),
        stride,
        sampled,
        covered,
        "path overlap sampled"
    );

    covered as f64 / sampled as f64
}

/// Overlap estimator bound to a proximity threshold and sample budget.
#[derive(Debug, Clone, Copy)]
pub struct OverlapEstimator {
    pub threshold_km: f64,
    pub max_samples: usize,
}

impl OverlapEstimator {
    pub fn new(threshold_km: f64, max_samples: usize) -> Self {
        Self {
            threshold_km,
            max_samples,
        }
    }

    /// Coverage of `from` by `to`. Direction matters: `from` is the sampled path.
    pub fn estimate(&self, from: &[GeoPoint], to: &[GeoPoint]) -> f64 {
        overlap_fraction(from, to, self.threshold_km, self.max_samples)
    }
}

impl Default for OverlapEstimator {
    fn default() -> Self {
        Self::from(&MatchConfig::default())
    }
}

impl From<&MatchConfig> for OverlapEstimator {
    fn from(config: &MatchConfig) -> Self {
        Self::new(config.match_threshold_km, config.max_samples)
    }
}
