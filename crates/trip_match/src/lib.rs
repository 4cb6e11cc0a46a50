//! Ride-share trip matching: decides whether a rider request and a driver
//! offer are compatible enough to be surfaced to each other.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use trip_match::{GeoPoint, Role, TripEvaluator, TripIntent};
//!
//! let depart = Utc.with_ymd_and_hms(2023, 10, 27, 10, 0, 0).unwrap();
//! let route = vec![
//!     GeoPoint::new(37.7749, -122.4194),
//!     GeoPoint::new(37.7849, -122.4094),
//! ];
//! let rider = TripIntent::new(Role::Rider, depart, route.clone());
//! let driver = TripIntent::new(Role::Driver, depart, route);
//!
//! let verdict = TripEvaluator::default().evaluate(&rider, &driver);
//! assert!(verdict.is_match());
//! ```
//!
//! # Architecture
//!
//! - [`geo`]: haversine distance between points
//! - [`polyline`]: compact polyline codec for encoded paths
//! - [`path`]: decoded paths and the raw/encoded source they arrive in
//! - [`trip`]: roles, resolved trip intents, stored trip records
//! - [`overlap`]: sampled point-proximity coverage of one path by another
//! - [`matching`]: thresholds, verdicts, the evaluator and candidate scanning
//!
//! Every operation is a pure function over its inputs.

pub mod error;
pub mod geo;
pub mod matching;
pub mod overlap;
pub mod path;
pub mod polyline;
pub mod trip;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use error::TripMatchError;
pub use geo::{distance_km, GeoPoint};
pub use matching::{MatchConfig, MatchVerdict, MismatchReason, TripEvaluator, TripMatch, TripMatcher};
pub use overlap::{overlap_fraction, OverlapEstimator};
pub use path::{Path, PathSource};
pub use polyline::PolylineError;
pub use trip::{Role, TripIntent, TripRecord};
