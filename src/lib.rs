//! Area Routing Library.
//! Builds greedy visiting orders over the locations of a category and
//! finds the nearest facility of a given type from where a route ends.

pub mod config;
pub mod error;
pub mod planner;

pub mod types {
    pub mod edge;
    pub mod facility;
    pub mod location;
    pub mod node;
    pub mod point;
    pub mod registry;
    pub mod route;
    pub mod router;
}

pub mod utils {
    pub mod coordinate;
    pub mod graph;
    pub mod great_circle;
}

pub mod algorithms {
    pub mod nearest_facility;
    pub mod nearest_neighbor;
}

pub use types::{edge, facility, location, node, point, registry, route, router};
pub use utils::{coordinate, great_circle};

pub use config::PlannerConfig;
pub use error::RouterError;
pub use planner::{plan_collection, plan_with_config, CollectionPlan};
