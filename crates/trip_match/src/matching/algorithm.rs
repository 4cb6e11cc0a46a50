use rayon::prelude::*;

use crate::trip::TripIntent;

use super::types::{MatchVerdict, TripMatch};

/// Trait for pairwise trip compatibility checks.
///
/// Implementations must be pure: the same pair always yields the same verdict
/// and no state is shared between calls, so candidates can be evaluated in
/// parallel.
pub trait TripMatcher: Send + Sync {
    /// Verdict for `mine` against a single `other` trip.
    fn evaluate(&self, mine: &TripIntent, other: &TripIntent) -> MatchVerdict;

    /// Evaluate `mine` against every candidate and keep the matches.
    ///
    /// Candidates carrying the same id as `mine` are skipped; a trip never
    /// matches itself. Results keep the order of `candidates`.
    fn find_matches(&self, mine: &TripIntent, candidates: &[TripIntent]) -> Vec<TripMatch> {
        candidates
            .par_iter()
            .enumerate()
            .filter(|(_, candidate)| !is_same_trip(mine, candidate))
            .filter_map(|(candidate_index, candidate)| {
                match self.evaluate(mine, candidate) {
                    MatchVerdict::Matched { overlap_score } => Some(TripMatch {
                        candidate_index,
                        candidate_id: candidate.id.clone(),
                        overlap_score,
                    }),
                    MatchVerdict::NotMatched { .. } => None,
                }
            })
            .collect()
    }
}

fn is_same_trip(a: &TripIntent, b: &TripIntent) -> bool {
    matches!((&a.id, &b.id), (Some(a), Some(b)) if a == b)
}
