use thiserror::Error;

use crate::polyline::PolylineError;

/// Failures surfaced while turning trip records into matchable intents.
///
/// A negative match is never an error; see [`crate::matching::MatchVerdict`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripMatchError {
    #[error("trip {trip_id}: cannot decode path: {source}")]
    Decode {
        trip_id: String,
        #[source]
        source: PolylineError,
    },
}

impl TripMatchError {
    pub(crate) fn decode(trip_id: Option<&str>, source: PolylineError) -> Self {
        TripMatchError::Decode {
            trip_id: trip_id.unwrap_or("<unnamed>").to_string(),
            source,
        }
    }
}
