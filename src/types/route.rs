//! Definition of the [`Route`] type.

use crate::{great_circle::node_distance, location::Location};

/// An ordered visiting sequence over the locations of one category.
///
/// Built by the [`Router`](crate::router::engine::Router); every
/// location of the category appears exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<'a> {
    stops: Vec<&'a Location>,
}

impl<'a> Route<'a> {
    pub fn new(stops: Vec<&'a Location>) -> Self {
        Route { stops }
    }

    /// The locations in visiting order.
    pub fn stops(&self) -> &[&'a Location] {
        &self.stops
    }

    /// The location names in visiting order.
    pub fn names(&self) -> Vec<&'a str> {
        self.stops.iter().map(|stop| stop.name.as_str()).collect()
    }

    pub fn first(&self) -> Option<&'a Location> {
        self.stops.first().copied()
    }

    /// Where the route ends; the reference point for facility lookup.
    pub fn last(&self) -> Option<&'a Location> {
        self.stops.last().copied()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sum of the great-circle distances between consecutive stops, in
    /// kilometers. Recomputed from coordinates, `0.0` for fewer than
    /// two stops.
    pub fn total_distance(&self) -> f64 {
        self.stops
            .windows(2)
            .map(|leg| node_distance(leg[0], leg[1]))
            .sum()
    }
}
