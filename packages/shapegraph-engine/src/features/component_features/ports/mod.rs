//! Graph algorithm oracles
//!
//! The feature engine never calls a graph library directly. Every
//! connectivity, shortest-path, colouring and cycle question goes through
//! these traits, so the backend can be swapped (petgraph by default, see
//! `infrastructure::PetgraphOracles`) without touching the predicates.
//!
//! All sets and paths are expressed as `NodeIndex` values of the component
//! being asked about.

use petgraph::graph::NodeIndex;

use super::domain::{Component, GraphView};

/// Vertex-set partitions
pub trait ConnectivityOracle {
    /// Connected components of the undirected view
    fn connected_sets(&self, component: &Component) -> Vec<Vec<NodeIndex>>;

    /// Strongly connected components of the directed view
    fn strongly_connected_sets(&self, component: &Component) -> Vec<Vec<NodeIndex>>;

    /// Biconnected blocks of the undirected view.
    ///
    /// Articulation vertices appear in every block they join; an isolated
    /// vertex forms a block on its own.
    fn biconnected_sets(&self, component: &Component) -> Vec<Vec<NodeIndex>>;
}

/// Unweighted (hop count) shortest paths
pub trait ShortestPathOracle {
    /// Distance from `source` to every vertex, `None` when unreachable.
    /// Indexed by `NodeIndex::index()`.
    fn hop_distances(
        &self,
        component: &Component,
        view: GraphView,
        source: NodeIndex,
    ) -> Vec<Option<usize>>;

    /// One shortest path from `source` to `target`, both endpoints included.
    fn shortest_path(
        &self,
        component: &Component,
        view: GraphView,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Option<Vec<NodeIndex>>;
}

/// Colouring of the undirected view
pub trait ChromaticHeuristic {
    /// Colours used by a greedy colouring. An upper bound on the chromatic
    /// number, not the exact value.
    fn color_count(&self, component: &Component) -> usize;

    /// Exact 2-colourability test
    fn is_two_colorable(&self, component: &Component) -> bool;
}

/// Cycle detection on the undirected view
pub trait CycleDetector {
    fn has_undirected_cycle(&self, component: &Component) -> bool;
}

/// The full backend a `ComponentFeatures` needs
pub trait GraphOracles:
    ConnectivityOracle + ShortestPathOracle + ChromaticHeuristic + CycleDetector + Send + Sync
{
}

impl<T> GraphOracles for T where
    T: ConnectivityOracle + ShortestPathOracle + ChromaticHeuristic + CycleDetector + Send + Sync
{
}
