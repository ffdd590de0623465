//! Struct definitions and implementations for [`Facility`].

use serde::{Deserialize, Serialize};

use super::{node::AsNode, point::GeoPoint};
use crate::error::RouterError;

/// A typed facility, such as an incineration plant or a landfill.
///
/// Facilities come from a dataset independent of the locations used
/// for routing. On the wire they are [`FacilityRecord`] rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FacilityRecord", into = "FacilityRecord")]
pub struct Facility {
    pub name: String,
    pub facility_type: String,
    pub position: GeoPoint,
}

impl Facility {
    /// Creates a facility; coordinates are given longitude first, as
    /// in the facility dataset.
    pub fn new(
        name: impl Into<String>,
        facility_type: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Facility {
            name: name.into(),
            facility_type: facility_type.into(),
            position: GeoPoint::new(latitude, longitude),
        }
    }
}

impl AsNode for Facility {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> GeoPoint {
        self.position
    }
}

/// A facility row as it appears in the facility dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub facility_type: String,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
}

impl TryFrom<FacilityRecord> for Facility {
    type Error = RouterError;

    fn try_from(record: FacilityRecord) -> Result<Self, Self::Error> {
        for value in [record.longitude, record.latitude] {
            if !value.is_finite() {
                return Err(RouterError::InvalidCoordinate {
                    value: value.to_string(),
                });
            }
        }
        Ok(Facility::new(
            record.name,
            record.facility_type,
            record.longitude,
            record.latitude,
        ))
    }
}

impl From<Facility> for FacilityRecord {
    fn from(facility: Facility) -> Self {
        FacilityRecord {
            name: facility.name,
            facility_type: facility.facility_type,
            longitude: facility.position.lon(),
            latitude: facility.position.lat(),
        }
    }
}
