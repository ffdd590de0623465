//! Nearest-neighbor route construction.
//!
//! Starting from a given node, repeatedly move to the closest unvisited
//! location until every location of the category has been visited. The
//! result is a Hamiltonian path: valid, but not necessarily the
//! shortest one.
//!
//! Ties are broken by location name, then by input order, so the
//! route only depends on the start node.

use log::debug;
use petgraph::{
    graph::NodeIndex,
    visit::{EdgeRef, VisitMap, Visitable},
};

use crate::{location::Location, route::Route, router::engine::Router};

/// Grows a route from `start` over the router's distance graph.
///
/// # Time Complexity
/// *O*(*n^2*) for `n` locations.
pub fn nearest_neighbor_route<'a>(router: &Router<'a>, start: NodeIndex) -> Route<'a> {
    let graph = router.graph();
    let Some(&first) = graph.node_weight(start) else {
        return Route::new(Vec::new());
    };

    let mut visited = graph.visit_map();
    visited.visit(start);
    let mut stops = vec![first];
    let mut current = start;

    while stops.len() < graph.node_count() {
        let nearest = graph
            .edges(current)
            .filter(|edge| !visited.is_visited(&edge.target()))
            .min_by_key(|edge| {
                let location: &'a Location = graph[edge.target()];
                (*edge.weight(), location.name.as_str(), edge.target().index())
            });

        let Some(edge) = nearest else {
            break;
        };
        let next = edge.target();
        visited.visit(next);
        stops.push(graph[next]);
        current = next;
    }

    let route = Route::new(stops);
    debug!("Route for {}: {:?}", router.category(), route.names());
    route
}

#[cfg(test)]
mod nearest_neighbor_tests {
    use super::*;
    use crate::great_circle::distance;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn equator_line() -> Vec<Location> {
        vec![
            Location::new("A", "X", 0.0, 0.0),
            Location::new("B", "X", 0.0, 1.0),
            Location::new("C", "X", 0.0, 2.0),
        ]
    }

    #[test]
    fn test_equator_line_from_start() {
        let locations = equator_line();
        let router = Router::new(&locations, "X").unwrap();

        let route = router.build_route_from("A").unwrap();
        assert_eq!(route.names(), vec!["A", "B", "C"]);

        let leg = distance(0.0, 0.0, 0.0, 1.0);
        assert!((leg - 111.19).abs() < 0.01);
        assert!((route.total_distance() - 2.0 * leg).abs() < 1e-6);
    }

    #[test]
    fn test_tie_goes_to_smaller_name() {
        let locations = equator_line();
        let router = Router::new(&locations, "X").unwrap();

        // A and C are both exactly one degree away from B.
        let route = router.build_route_from("B").unwrap();
        assert_eq!(route.names(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_tie_ignores_input_order() {
        let locations = vec![
            Location::new("Zulu", "X", 0.0, 2.0),
            Location::new("Mid", "X", 0.0, 1.0),
            Location::new("Alpha", "X", 0.0, 0.0),
        ];
        let router = Router::new(&locations, "X").unwrap();

        let route = router.build_route_from("Mid").unwrap();
        assert_eq!(route.names(), vec!["Mid", "Alpha", "Zulu"]);
    }

    #[test]
    fn test_greedy_not_optimal() {
        // From B the greedy step goes to C (closer) and then has to
        // travel all the way back to A.
        let locations = vec![
            Location::new("A", "X", 0.0, 0.0),
            Location::new("B", "X", 0.0, 2.0),
            Location::new("C", "X", 0.0, 3.0),
        ];
        let router = Router::new(&locations, "X").unwrap();

        let route = router.build_route_from("B").unwrap();
        assert_eq!(route.names(), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_route_is_complete_and_distinct() {
        let mut locations = Vec::new();
        for i in 0..40 {
            let lat = 48.0 + (i as f64 * 0.37) % 3.0;
            let lon = 9.0 + (i as f64 * 0.61) % 4.0;
            locations.push(Location::new(format!("Area {}", i), "Grid", lat, lon));
        }
        locations.push(Location::new("Elsewhere", "Other", 0.0, 0.0));
        let router = Router::new(&locations, "Grid").unwrap();

        for seed in 0..10 {
            let route = router.build_route(&mut StdRng::seed_from_u64(seed));
            let names: HashSet<&str> = route.names().into_iter().collect();
            assert_eq!(route.len(), 40);
            assert_eq!(names.len(), 40);
            assert!(!names.contains("Elsewhere"));
        }
    }

    #[test]
    fn test_same_seed_same_route() {
        let locations = vec![
            Location::new("Nord", "X", 54.0, 10.0),
            Location::new("Sued", "X", 48.0, 11.0),
            Location::new("Ost", "X", 52.0, 14.0),
            Location::new("West", "X", 51.0, 6.5),
        ];
        let router = Router::new(&locations, "X").unwrap();

        let first = router.build_route(&mut StdRng::seed_from_u64(42));
        let second = router.build_route(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
