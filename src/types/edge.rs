//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;

/// A directed connection between two graph nodes.
/// The cost is the great-circle distance in kilometers.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub struct Edge {
    /// Index of the node the edge leaves.
    pub from: NodeIndex,

    /// Index of the node the edge reaches.
    pub to: NodeIndex,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}
