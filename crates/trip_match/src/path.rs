//! Ordered point sequences and the raw/encoded union they arrive in.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::polyline::{self, PolylineError};

/// An ordered sequence of points in travel order. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<GeoPoint>);

impl Path {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.0.iter()
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.0
    }
}

impl From<Vec<GeoPoint>> for Path {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }
}

impl FromIterator<GeoPoint> for Path {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// How a trip's path arrives from the trip source: decoded points or a
/// compact polyline that still needs decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSource {
    Raw(Path),
    Encoded(String),
}

impl PathSource {
    /// Turn the source into a decoded [`Path`].
    pub fn resolve(self) -> Result<Path, PolylineError> {
        match self {
            PathSource::Raw(path) => Ok(path),
            PathSource::Encoded(encoded) => polyline::decode(&encoded).map(Path::from),
        }
    }
}

impl From<Path> for PathSource {
    fn from(path: Path) -> Self {
        PathSource::Raw(path)
    }
}
