//! Read-only registry of locations and facilities for one run.
//!
//! The registry is loaded once from already-parsed records and never
//! mutated afterwards, so it can be shared between route and facility
//! queries without locking.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::nearest_facility::{nearest_facility, NearestFacility},
    error::RouterError,
    facility::Facility,
    location::Location,
    router::engine::Router,
};

/// All locations and facilities known to the router.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    locations: Vec<Location>,
    facilities: Vec<Facility>,
}

impl Registry {
    pub fn new(locations: Vec<Location>, facilities: Vec<Facility>) -> Self {
        Registry {
            locations,
            facilities,
        }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Distinct location categories, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.locations.iter().map(|location| location.category.as_str()))
    }

    /// Distinct facility types, in order of first appearance.
    pub fn facility_types(&self) -> Vec<&str> {
        distinct(
            self.facilities
                .iter()
                .map(|facility| facility.facility_type.as_str()),
        )
    }

    /// Resolves a 1-based menu number to a category.
    pub fn category_at(&self, choice: usize) -> Result<&str, RouterError> {
        select(&self.categories(), choice)
    }

    /// Resolves a 1-based menu number to a facility type.
    pub fn facility_type_at(&self, choice: usize) -> Result<&str, RouterError> {
        select(&self.facility_types(), choice)
    }

    /// Gets the first location with the given name.
    pub fn find_location(&self, name: &str) -> Result<&Location, RouterError> {
        self.locations
            .iter()
            .find(|location| location.name == name)
            .ok_or_else(|| {
                warn!("Unknown location {}", name);
                RouterError::UnresolvedReferenceName {
                    name: name.to_string(),
                }
            })
    }

    /// Builds the distance graph over the locations of `category`.
    pub fn router(&self, category: &str) -> Result<Router<'_>, RouterError> {
        Router::new(&self.locations, category)
    }

    /// Finds the facility of `facility_type` nearest to the named
    /// location.
    pub fn nearest_facility(
        &self,
        location_name: &str,
        facility_type: &str,
    ) -> Result<NearestFacility<'_>, RouterError> {
        let reference = self.find_location(location_name)?;
        nearest_facility(reference, facility_type, &self.facilities)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

fn select<'a>(options: &[&'a str], choice: usize) -> Result<&'a str, RouterError> {
    choice
        .checked_sub(1)
        .and_then(|index| options.get(index))
        .copied()
        .ok_or(RouterError::InvalidSelection {
            choice,
            available: options.len(),
        })
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    fn sample_registry() -> Registry {
        Registry::new(
            vec![
                Location::new("Mitte", "Center", 52.5200, 13.4050),
                Location::new("Spandau", "West", 52.5351, 13.1975),
                Location::new("Moabit", "Center", 52.5302, 13.3423),
                Location::new("Mitte", "West", 52.0, 13.0),
            ],
            vec![
                Facility::new("Ruhleben", "Incinerator", 13.2373, 52.5286),
                Facility::new("Schwanebeck", "Landfill", 13.5400, 52.6200),
                Facility::new("Lichterfelde", "Incinerator", 13.3000, 52.4300),
            ],
        )
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let registry = sample_registry();
        assert_eq!(registry.categories(), vec!["Center", "West"]);
        assert_eq!(registry.facility_types(), vec!["Incinerator", "Landfill"]);
    }

    #[test]
    fn test_one_based_selection() {
        let registry = sample_registry();
        assert_eq!(registry.category_at(1), Ok("Center"));
        assert_eq!(registry.facility_type_at(2), Ok("Landfill"));
        assert_eq!(
            registry.category_at(0),
            Err(RouterError::InvalidSelection {
                choice: 0,
                available: 2
            })
        );
        assert_eq!(
            registry.facility_type_at(3),
            Err(RouterError::InvalidSelection {
                choice: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_find_location_first_match() {
        let registry = sample_registry();
        assert_eq!(registry.find_location("Mitte").unwrap().category, "Center");
        assert_eq!(
            registry.find_location("Pankow"),
            Err(RouterError::UnresolvedReferenceName {
                name: "Pankow".to_string()
            })
        );
    }

    #[test]
    fn test_nearest_facility_by_name() {
        let registry = sample_registry();
        let found = registry.nearest_facility("Spandau", "Incinerator").unwrap();
        assert_eq!(found.facility.name, "Ruhleben");

        assert_eq!(
            registry.nearest_facility("Pankow", "Incinerator"),
            Err(RouterError::UnresolvedReferenceName {
                name: "Pankow".to_string()
            })
        );
        assert_eq!(
            registry.nearest_facility("Spandau", "Compost"),
            Err(RouterError::NoFacilityOfType {
                facility_type: "Compost".to_string()
            })
        );
    }
}
