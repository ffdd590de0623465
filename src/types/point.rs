//! Struct definitions and implementations for [`GeoPoint`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Values are wrapped in [`OrderedFloat`] so that points can be used
/// as map keys and compared for equality. Out-of-range values are not
/// rejected; the distance metric will simply compute with them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    pub fn lat(&self) -> f64 {
        self.latitude.into_inner()
    }

    pub fn lon(&self) -> f64 {
        self.longitude.into_inner()
    }
}
