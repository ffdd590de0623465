//! Struct definitions and implementations for [`Location`].
//!
//! A location is a named area that belongs to exactly one category
//! (a city area). Routes are built over the locations of one category.

use serde::{Deserialize, Serialize};

use super::{node::AsNode, point::GeoPoint};
use crate::{coordinate::parse_coordinate, error::RouterError};

/// A named area with its position.
///
/// Names are expected to be unique within a category. The router keys
/// its graph by a synthetic index, so duplicates still produce a valid
/// route, but reporting by name becomes ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub category: String,
    pub position: GeoPoint,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Location {
            name: name.into(),
            category: category.into(),
            position: GeoPoint::new(latitude, longitude),
        }
    }
}

impl AsNode for Location {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> GeoPoint {
        self.position
    }
}

/// A location row as it appears in a tabular export, with coordinates
/// still as text.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "AREA NAME")]
    pub name: String,
    #[serde(rename = "CITY AREA")]
    pub category: String,
    #[serde(rename = "LATITUDE")]
    pub latitude: String,
    #[serde(rename = "LONGITUDE")]
    pub longitude: String,
}

impl TryFrom<LocationRecord> for Location {
    type Error = RouterError;

    fn try_from(record: LocationRecord) -> Result<Self, Self::Error> {
        let latitude = parse_coordinate(&record.latitude)?;
        let longitude = parse_coordinate(&record.longitude)?;
        Ok(Location::new(
            record.name,
            record.category,
            latitude,
            longitude,
        ))
    }
}
