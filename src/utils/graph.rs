//! Helper functions for working with graphs.

use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;

use crate::types::{edge::Edge, location::Location, node::AsNode};

/// Build edges among indexed locations.
///
/// Every location is connected to every other location. The cost of
/// each unordered pair is computed exactly once and stored as two
/// directed edges, so the resulting edge list is symmetric.
///
/// # Arguments
/// * `nodes` - The locations to connect, with their graph indices.
/// * `cost_function` - A function that computes the "weight" between
///   two nodes.
///
/// # Returns
/// A vector of `n * (n - 1)` edges.
///
/// # Time Complexity
/// *O*(*n^2*).
pub fn build_edges(
    nodes: &[(NodeIndex, &Location)],
    cost_function: fn(&dyn AsNode, &dyn AsNode) -> f64,
) -> Vec<Edge> {
    let count = nodes.len();
    let mut edges = Vec::with_capacity(count * count.saturating_sub(1));
    for (i, &(from, from_location)) in nodes.iter().enumerate() {
        for &(to, to_location) in &nodes[i + 1..] {
            let cost = OrderedFloat(cost_function(from_location, to_location));
            edges.push(Edge { from, to, cost });
            edges.push(Edge {
                from: to,
                to: from,
                cost,
            });
        }
    }
    edges
}

#[cfg(test)]
mod graph_tests {
    use super::*;
    use crate::great_circle::node_distance;

    #[test]
    fn test_no_edges_for_single_location() {
        let only = Location::new("A", "X", 0.0, 0.0);
        let edges = build_edges(&[(NodeIndex::new(0), &only)], node_distance);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_edges_are_symmetric() {
        let a = Location::new("A", "X", 0.0, 0.0);
        let b = Location::new("B", "X", 0.0, 1.0);
        let c = Location::new("C", "X", 1.0, 1.0);
        let nodes = [
            (NodeIndex::new(0), &a),
            (NodeIndex::new(1), &b),
            (NodeIndex::new(2), &c),
        ];
        let edges = build_edges(&nodes, node_distance);

        assert_eq!(edges.len(), 6);
        for edge in &edges {
            let reverse = edges
                .iter()
                .find(|other| other.from == edge.to && other.to == edge.from)
                .unwrap();
            assert_eq!(reverse.cost, edge.cost);
        }
        let a_to_b = edges
            .iter()
            .find(|edge| edge.from == NodeIndex::new(0) && edge.to == NodeIndex::new(1))
            .unwrap();
        assert_eq!(a_to_b.cost, OrderedFloat(node_distance(&a, &b)));
    }
}
