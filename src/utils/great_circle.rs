//! Great-circle distance on a spherical Earth.
//!
//! Uses the spherical law of cosines. Near-identical and antipodal
//! points can push the cosine sum slightly outside `[-1, 1]` through
//! rounding; it is clamped before taking the inverse cosine so the
//! result is never `NaN` for finite inputs.

use log::trace;

use crate::types::{node::AsNode, point::GeoPoint};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Upper bound of any great-circle distance: half the circumference.
pub const MAX_DISTANCE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;

/// Clamps the argument of `acos` into its domain.
pub fn clamp_cosine(value: f64) -> f64 {
    if !(-1.0..=1.0).contains(&value) {
        trace!("(clamp_cosine) cosine sum {} outside [-1, 1]", value);
    }
    value.clamp(-1.0, 1.0)
}

/// Distance in kilometers between two coordinates given in degrees.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let cosine = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon2 - lon1).cos();
    clamp_cosine(cosine).acos() * EARTH_RADIUS_KM
}

/// Distance in kilometers between two points.
pub fn distance_between(from: &GeoPoint, to: &GeoPoint) -> f64 {
    distance(from.lat(), from.lon(), to.lat(), to.lon())
}

/// Distance in kilometers between any two node-like records.
pub fn node_distance(from: &dyn AsNode, to: &dyn AsNode) -> f64 {
    distance_between(&from.position(), &to.position())
}
