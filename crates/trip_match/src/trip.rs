//! Trip intents and the stored record shape they are resolved from.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TripMatchError;
use crate::geo::GeoPoint;
use crate::path::{Path, PathSource};

/// Which side of a ride-share a trip is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Rider,
    Driver,
}

impl Role {
    /// The role a compatible trip must have.
    pub fn counterpart(self) -> Role {
        match self {
            Role::Rider => Role::Driver,
            Role::Driver => Role::Rider,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Rider => f.write_str("rider"),
            Role::Driver => f.write_str("driver"),
        }
    }
}

/// A resolved trip, ready for evaluation. Its path is always decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct TripIntent {
    /// Caller-side identifier, carried through untouched.
    pub id: Option<String>,
    pub role: Role,
    pub departure_time: DateTime<Utc>,
    pub path: Path,
}

impl TripIntent {
    pub fn new(role: Role, departure_time: DateTime<Utc>, path: impl Into<Path>) -> Self {
        Self {
            id: None,
            role,
            departure_time,
            path: path.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_departure_time(mut self, departure_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self
    }
}

/// A trip as stored by the trip source.
///
/// Either `encoded_polyline` or `route_coordinates` carries the path; the
/// encoded form wins when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: Role,
    #[serde(rename = "datetime")]
    pub departure_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_polyline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_coordinates: Option<Vec<GeoPoint>>,
}

impl TripRecord {
    pub fn path_source(&self) -> PathSource {
        match (&self.encoded_polyline, &self.route_coordinates) {
            (Some(encoded), _) => PathSource::Encoded(encoded.clone()),
            (None, Some(points)) => PathSource::Raw(Path::new(points.clone())),
            (None, None) => PathSource::Raw(Path::default()),
        }
    }

    /// Decode the path and produce the intent the evaluator works on.
    pub fn resolve(&self) -> Result<TripIntent, TripMatchError> {
        let path = self
            .path_source()
            .resolve()
            .map_err(|source| TripMatchError::decode(self.id.as_deref(), source))?;
        Ok(TripIntent {
            id: self.id.clone(),
            role: self.role,
            departure_time: self.departure_time,
            path,
        })
    }
}
