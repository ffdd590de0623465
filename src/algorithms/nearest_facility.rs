//! Nearest facility lookup.
//!
//! A linear scan over all facilities of one type, measuring the
//! great-circle distance from a reference node to each.

use log::{debug, warn};

use crate::{
    error::RouterError, facility::Facility, great_circle::node_distance, node::AsNode,
};

/// The closest facility of a type and its distance in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestFacility<'a> {
    pub facility: &'a Facility,
    pub distance_km: f64,
}

/// Finds the facility of `facility_type` closest to `reference`.
///
/// The first facility in registry order wins ties. Facilities whose
/// distance is not a number are skipped. Returns
/// [`RouterError::NoFacilityOfType`] if no facility of the type has a
/// usable distance.
///
/// # Time Complexity
/// *O*(*m*) for `m` facilities.
pub fn nearest_facility<'a>(
    reference: &dyn AsNode,
    facility_type: &str,
    facilities: &'a [Facility],
) -> Result<NearestFacility<'a>, RouterError> {
    let mut nearest: Option<NearestFacility<'a>> = None;
    let mut min_distance = f64::INFINITY;
    for facility in facilities
        .iter()
        .filter(|facility| facility.facility_type == facility_type)
    {
        // NaN never compares below the running minimum.
        let distance_km = node_distance(reference, facility);
        if distance_km < min_distance {
            min_distance = distance_km;
            nearest = Some(NearestFacility {
                facility,
                distance_km,
            });
        }
    }

    match nearest {
        Some(found) => {
            debug!(
                "Nearest {} to {}: {} ({} km)",
                facility_type,
                reference.name(),
                found.facility.name,
                found.distance_km
            );
            Ok(found)
        }
        None => {
            warn!("No facility of type {}", facility_type);
            Err(RouterError::NoFacilityOfType {
                facility_type: facility_type.to_string(),
            })
        }
    }
}
