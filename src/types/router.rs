//! The core of the routing library.
//!
//! The engine module builds a complete distance graph over the
//! locations of one category. Routes are then grown over that graph
//! with the nearest-neighbor heuristic.

/// The router engine module.
pub mod engine {
    use log::{debug, warn};
    use ordered_float::OrderedFloat;
    use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph};
    use rand::{seq::SliceRandom, Rng};

    use crate::{
        algorithms::nearest_neighbor::nearest_neighbor_route,
        error::RouterError,
        great_circle::node_distance,
        location::Location,
        route::Route,
        utils::graph::build_edges,
    };

    /// A Router contains the distance graph of one category.
    ///
    /// Graph nodes are keyed by [`NodeIndex`], assigned in input order,
    /// so duplicate names within a category never collide.
    #[derive(Debug)]
    pub struct Router<'a> {
        category: String,
        graph: StableDiGraph<&'a Location, OrderedFloat<f64>>,
        node_indices: Vec<NodeIndex>,
    }

    impl<'a> Router<'a> {
        /// Creates a new router over the locations of `category`.
        ///
        /// Returns [`RouterError::EmptyCategory`] if no location
        /// belongs to the category.
        pub fn new(locations: &'a [Location], category: &str) -> Result<Router<'a>, RouterError> {
            debug!("[1/3] Filtering locations of category {}", category);
            let filtered: Vec<&'a Location> = locations
                .iter()
                .filter(|location| location.category == category)
                .collect();
            if filtered.is_empty() {
                warn!("No locations found for category {}", category);
                return Err(RouterError::EmptyCategory {
                    category: category.to_string(),
                });
            }

            debug!("[2/3] Building the graph...");
            let mut graph = StableDiGraph::with_capacity(
                filtered.len(),
                filtered.len() * (filtered.len() - 1),
            );
            let nodes: Vec<(NodeIndex, &'a Location)> = filtered
                .iter()
                .map(|&location| (graph.add_node(location), location))
                .collect();

            debug!("[3/3] Building edges among {} locations", nodes.len());
            for edge in build_edges(&nodes, node_distance) {
                graph.add_edge(edge.from, edge.to, edge.cost);
            }
            let node_indices = nodes.into_iter().map(|(index, _)| index).collect();

            debug!(
                "Router ready for {}: {} nodes, {} edges",
                category,
                graph.node_count(),
                graph.edge_count()
            );
            Ok(Router {
                category: category.to_string(),
                graph,
                node_indices,
            })
        }

        /// The category this router was built for.
        pub fn category(&self) -> &str {
            &self.category
        }

        /// Node indices of all locations, in input order.
        pub fn node_indices(&self) -> &[NodeIndex] {
            &self.node_indices
        }

        /// Get the location stored at a node index.
        pub fn get_location(&self, index: NodeIndex) -> Option<&'a Location> {
            self.graph.node_weight(index).copied()
        }

        /// Get the NodeIndex of the first location with the given name.
        pub fn get_node_index(&self, name: &str) -> Option<NodeIndex> {
            self.node_indices
                .iter()
                .copied()
                .find(|&index| self.graph[index].name == name)
        }

        /// The cost of the edge between two nodes, if both exist and
        /// differ.
        pub fn get_cost(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
            self.graph
                .find_edge(from, to)
                .and_then(|edge| self.graph.edge_weight(edge))
                .map(|cost| cost.into_inner())
        }

        /// Return the number of edges in the graph.
        pub fn get_edge_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Get the number of nodes in the graph.
        pub fn get_node_count(&self) -> usize {
            self.graph.node_count()
        }

        pub(crate) fn graph(&self) -> &StableDiGraph<&'a Location, OrderedFloat<f64>> {
            &self.graph
        }

        /// Builds a route starting from a uniformly random location.
        pub fn build_route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route<'a> {
            // `new` rejects empty categories.
            let start = match self.node_indices.choose(rng) {
                Some(&start) => start,
                None => return Route::new(Vec::new()),
            };
            debug!("Random start: {}", self.graph[start].name);
            nearest_neighbor_route(self, start)
        }

        /// Builds a route starting from the named location.
        pub fn build_route_from(&self, name: &str) -> Result<Route<'a>, RouterError> {
            let start = self
                .get_node_index(name)
                .ok_or_else(|| RouterError::UnknownStart {
                    name: name.to_string(),
                    category: self.category.clone(),
                })?;
            Ok(nearest_neighbor_route(self, start))
        }
    }
}
