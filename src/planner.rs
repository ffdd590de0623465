//! End-to-end collection planning.
//!
//! Routes through every location of a category, then finds the nearest
//! facility of the requested type from where the route ends.

use std::fmt;

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::{
    algorithms::nearest_facility::nearest_facility, config::PlannerConfig, error::RouterError,
    registry::Registry, route::Route,
};

/// The computed result handed to the reporting side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionPlan {
    pub category: String,
    pub facility_type: String,
    pub route: Vec<String>,
    pub total_distance_km: f64,
    pub facility: String,
    pub facility_distance_km: f64,
}

/// Plans a collection with a random start drawn from `rng`.
pub fn plan_collection<R: Rng + ?Sized>(
    registry: &Registry,
    category: &str,
    facility_type: &str,
    rng: &mut R,
) -> Result<CollectionPlan, RouterError> {
    info!("[1/3]: Building route for {}", category);
    let router = registry.router(category)?;
    let route = router.build_route(rng);
    finish_plan(registry, category, facility_type, &route)
}

/// Plans a collection with the start chosen by `config`.
pub fn plan_with_config(
    registry: &Registry,
    category: &str,
    facility_type: &str,
    config: &PlannerConfig,
) -> Result<CollectionPlan, RouterError> {
    match &config.start {
        Some(start) => {
            info!("[1/3]: Building route for {} from {}", category, start);
            let router = registry.router(category)?;
            let route = router.build_route_from(start)?;
            finish_plan(registry, category, facility_type, &route)
        }
        None => plan_collection(registry, category, facility_type, &mut config.rng()),
    }
}

fn finish_plan(
    registry: &Registry,
    category: &str,
    facility_type: &str,
    route: &Route<'_>,
) -> Result<CollectionPlan, RouterError> {
    info!("[2/3]: Summing route distance");
    let total_distance_km = route.total_distance();
    debug!("Total distance: {} km", total_distance_km);

    info!("[3/3]: Finding nearest {}", facility_type);
    let last = route.last().ok_or_else(|| RouterError::EmptyCategory {
        category: category.to_string(),
    })?;
    let nearest = nearest_facility(last, facility_type, registry.facilities())?;

    info!("Finished planning collection for {}", category);
    Ok(CollectionPlan {
        category: category.to_string(),
        facility_type: facility_type.to_string(),
        route: route.names().into_iter().map(String::from).collect(),
        total_distance_km,
        facility: nearest.facility.name.clone(),
        facility_distance_km: nearest.distance_km,
    })
}

impl fmt::Display for CollectionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route: {}", self.route.join(" -> "))?;
        writeln!(
            f,
            "Total distance of the route: {:.2} km",
            self.total_distance_km
        )?;
        write!(
            f,
            "The closest facility of type {} to the last area in the route is {} with a distance of {:.2} km.",
            self.facility_type, self.facility, self.facility_distance_km
        )
    }
}
