//! Test helpers for common test setup and utilities.
//!
//! Fixture routes around San Francisco and Los Angeles, plus trip builders
//! anchored on a fixed departure time.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::geo::GeoPoint;
use crate::path::Path;
use crate::trip::{Role, TripIntent};

/// Reference departure time: 2023-10-27T10:00:00Z.
///
/// # Panics
///
/// Panics if the constant timestamp is invalid (should never happen).
pub fn base_departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 27, 10, 0, 0)
        .single()
        .expect("base departure should be a valid timestamp")
}

/// Three points heading north-east through San Francisco.
pub fn sf_route() -> Path {
    Path::new(vec![
        GeoPoint::new(37.7749, -122.4194),
        GeoPoint::new(37.7849, -122.4094),
        GeoPoint::new(37.7949, -122.3994),
    ])
}

/// [`sf_route`] shifted by about 14 metres.
pub fn sf_route_offset() -> Path {
    Path::new(vec![
        GeoPoint::new(37.7750, -122.4195),
        GeoPoint::new(37.7850, -122.4095),
        GeoPoint::new(37.7950, -122.3995),
    ])
}

/// Two points in Los Angeles, roughly 550 km from [`sf_route`].
pub fn la_route() -> Path {
    Path::new(vec![
        GeoPoint::new(34.0522, -118.2437),
        GeoPoint::new(34.0622, -118.2337),
    ])
}

/// `count` points due north from `start_lat` along longitude -122.42.
pub fn north_line(start_lat: f64, step_deg: f64, count: usize) -> Path {
    (0..count)
        .map(|i| GeoPoint::new(start_lat + step_deg * i as f64, -122.42))
        .collect()
}

/// A trip departing `offset_minutes` after [`base_departure`].
pub fn trip_at(role: Role, offset_minutes: i64, path: Path) -> TripIntent {
    TripIntent::new(role, base_departure() + Duration::minutes(offset_minutes), path)
}
