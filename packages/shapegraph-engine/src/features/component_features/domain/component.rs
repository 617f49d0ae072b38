//! Component graph snapshot
//!
//! A component carries two views over one vertex set:
//! - a directed multigraph (every ingested edge, self-loops included)
//! - an undirected simple graph (parallel edges merged, self-loops dropped)
//!
//! Both views are petgraph `Graph`s built with identical node insertion, so a
//! `NodeIndex` addresses the same vertex in either view, and node index order
//! is the component's fixed vertex order.

use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

use crate::shared::models::{VertexId, VertexOrder};

/// Which view of a component an operation runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphView {
    Directed,
    Undirected,
}

/// Immutable graph snapshot of one component
#[derive(Debug, Clone)]
pub struct Component {
    directed: DiGraph<VertexId, ()>,
    undirected: UnGraph<VertexId, ()>,
    index: HashMap<VertexId, NodeIndex>,
}

impl Component {
    /// Build a component from a vertex set and directed edges.
    ///
    /// Duplicate vertices are merged. Edges with an endpoint outside the
    /// vertex set are dropped, which makes this the induced-subgraph
    /// constructor as well. With [`VertexOrder::Lexicographic`] vertices are
    /// sorted by identifier and edges by endpoint position.
    pub fn new<V, S, E, T>(vertices: V, edges: E, order: VertexOrder) -> Self
    where
        V: IntoIterator<Item = S>,
        S: Into<VertexId>,
        E: IntoIterator<Item = (T, T)>,
        T: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut ids: Vec<VertexId> = Vec::new();
        for vertex in vertices {
            let vertex = vertex.into();
            if seen.insert(vertex.clone()) {
                ids.push(vertex);
            }
        }
        if order == VertexOrder::Lexicographic {
            ids.sort();
        }

        let mut directed = DiGraph::with_capacity(ids.len(), 0);
        let mut undirected = UnGraph::with_capacity(ids.len(), 0);
        let mut index = HashMap::with_capacity(ids.len());
        for id in ids {
            let node = directed.add_node(id.clone());
            let mirrored = undirected.add_node(id.clone());
            debug_assert_eq!(node, mirrored);
            index.insert(id, node);
        }

        let mut resolved: Vec<(NodeIndex, NodeIndex)> = edges
            .into_iter()
            .filter_map(|(source, target)| {
                let source = *index.get(source.as_ref())?;
                let target = *index.get(target.as_ref())?;
                Some((source, target))
            })
            .collect();
        if order == VertexOrder::Lexicographic {
            resolved.sort();
        }

        let mut simple_edges = HashSet::new();
        for (source, target) in resolved {
            directed.add_edge(source, target, ());
            if source == target {
                continue;
            }
            let key = if source < target {
                (source, target)
            } else {
                (target, source)
            };
            if simple_edges.insert(key) {
                undirected.add_edge(key.0, key.1, ());
            }
        }

        Self {
            directed,
            undirected,
            index,
        }
    }

    /// Convenience constructor: vertices are the edge endpoints
    pub fn from_edges<E, T>(edges: E, order: VertexOrder) -> Self
    where
        E: IntoIterator<Item = (T, T)>,
        T: AsRef<str>,
    {
        let edges: Vec<(T, T)> = edges.into_iter().collect();
        let vertices: Vec<VertexId> = edges
            .iter()
            .flat_map(|(s, t)| [s.as_ref().to_string(), t.as_ref().to_string()])
            .collect();
        Self::new(vertices, edges, order)
    }

    /// Subgraph induced by `keep`, preserving this component's vertex and
    /// edge order. Unknown identifiers are ignored.
    pub fn induced<'a, I>(&self, keep: I) -> Component
    where
        I: IntoIterator<Item = &'a str>,
    {
        let kept: HashSet<NodeIndex> = keep
            .into_iter()
            .filter_map(|vertex| self.index_of(vertex))
            .collect();
        self.restricted(|node| kept.contains(&node))
    }

    /// Subgraphs induced by each of the disjoint vertex sets in `parts`,
    /// built in one pass over the edges. Vertex and edge order follow this
    /// component, as with [`Component::induced`].
    pub fn induced_parts<P, S>(&self, parts: &[P]) -> Vec<Component>
    where
        P: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut owner: Vec<Option<usize>> = vec![None; self.vertex_count()];
        for (slot, part) in parts.iter().enumerate() {
            for vertex in part.as_ref() {
                if let Some(node) = self.index_of(vertex.as_ref()) {
                    debug_assert!(owner[node.index()].is_none(), "parts overlap");
                    owner[node.index()] = Some(slot);
                }
            }
        }

        let mut vertices: Vec<Vec<&str>> = vec![Vec::new(); parts.len()];
        for node in self.node_indices() {
            if let Some(slot) = owner[node.index()] {
                vertices[slot].push(self.vertex(node));
            }
        }
        let mut edges: Vec<Vec<(&str, &str)>> = vec![Vec::new(); parts.len()];
        for (source, target) in self.edges() {
            if let (Some(a), Some(b)) = (owner[source.index()], owner[target.index()]) {
                if a == b {
                    edges[a].push((self.vertex(source), self.vertex(target)));
                }
            }
        }

        vertices
            .into_iter()
            .zip(edges)
            .map(|(vertices, edges)| Component::new(vertices, edges, VertexOrder::Insertion))
            .collect()
    }

    /// Copy of this component without the `excluded` vertices (and every
    /// edge touching them).
    pub fn without(&self, excluded: &HashSet<NodeIndex>) -> Component {
        self.restricted(|node| !excluded.contains(&node))
    }

    fn restricted(&self, keep: impl Fn(NodeIndex) -> bool) -> Component {
        let vertices: Vec<VertexId> = self
            .node_indices()
            .filter(|&node| keep(node))
            .map(|node| self.directed[node].clone())
            .collect();
        let edges: Vec<(&str, &str)> = self
            .directed
            .edge_references()
            .filter(|edge| keep(edge.source()) && keep(edge.target()))
            .map(|edge| (self.vertex(edge.source()), self.vertex(edge.target())))
            .collect();
        Component::new(vertices, edges, VertexOrder::Insertion)
    }

    pub fn vertex_count(&self) -> usize {
        self.directed.node_count()
    }

    /// Directed edge count (parallel edges and self-loops included)
    pub fn edge_count(&self) -> usize {
        self.directed.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.directed.node_count() == 0
    }

    pub fn directed(&self) -> &DiGraph<VertexId, ()> {
        &self.directed
    }

    pub fn undirected(&self) -> &UnGraph<VertexId, ()> {
        &self.undirected
    }

    /// Vertex indices in the fixed vertex order
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.directed.node_count()).map(NodeIndex::new)
    }

    /// Vertex identifiers in the fixed vertex order
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.directed.node_weights().map(String::as_str)
    }

    pub fn vertex(&self, node: NodeIndex) -> &str {
        &self.directed[node]
    }

    pub fn index_of(&self, vertex: &str) -> Option<NodeIndex> {
        self.index.get(vertex).copied()
    }

    /// Directed edges as (source, target) in edge insertion order
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.directed
            .edge_references()
            .map(|edge| (edge.source(), edge.target()))
    }

    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.directed
            .edges_directed(node, Direction::Incoming)
            .count()
    }

    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.directed
            .edges_directed(node, Direction::Outgoing)
            .count()
    }

    /// In-degree plus out-degree in the directed multigraph
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.in_degree(node) + self.out_degree(node)
    }

    /// Neighbour count in the undirected simple view
    pub fn simple_degree(&self, node: NodeIndex) -> usize {
        self.undirected.neighbors(node).count()
    }

    /// Neighbours of `node` in `view`, ascending by vertex order, without
    /// duplicates.
    pub fn sorted_neighbors(&self, view: GraphView, node: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = match view {
            GraphView::Directed => self.directed.neighbors(node).collect(),
            GraphView::Undirected => self.undirected.neighbors(node).collect(),
        };
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        let component = Component::from_edges([("c", "a"), ("b", "c")], VertexOrder::Lexicographic);
        let vertices: Vec<&str> = component.vertices().collect();
        assert_eq!(vertices, vec!["a", "b", "c"]);
        assert_eq!(component.index_of("c"), Some(NodeIndex::new(2)));
    }

    #[test]
    fn test_insertion_order() {
        let component = Component::new(["c", "a", "b", "a"], [("c", "a")], VertexOrder::Insertion);
        let vertices: Vec<&str> = component.vertices().collect();
        assert_eq!(vertices, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_simple_view_merges_parallel_edges() {
        let component = Component::from_edges(
            [("a", "b"), ("b", "a"), ("a", "b"), ("a", "a")],
            VertexOrder::Lexicographic,
        );
        assert_eq!(component.edge_count(), 4);
        assert_eq!(component.undirected().edge_count(), 1);

        let a = component.index_of("a").unwrap();
        // self-loop counts once in each direction
        assert_eq!(component.out_degree(a), 3);
        assert_eq!(component.in_degree(a), 2);
        assert_eq!(component.simple_degree(a), 1);
    }

    #[test]
    fn test_induced_drops_outside_edges() {
        let component = Component::from_edges(
            [("a", "b"), ("b", "c"), ("c", "d")],
            VertexOrder::Lexicographic,
        );
        let sub = component.induced(["b", "c"]);
        assert_eq!(sub.vertex_count(), 2);
        assert_eq!(sub.edge_count(), 1);

        let mut excluded = HashSet::new();
        excluded.insert(component.index_of("a").unwrap());
        let rest = component.without(&excluded);
        assert_eq!(rest.vertex_count(), 3);
        assert_eq!(rest.edge_count(), 2);
        assert_eq!(rest.vertices().next(), Some("b"));
    }

    #[test]
    fn test_induced_parts_match_induced() {
        let component = Component::from_edges(
            [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("x", "y")],
            VertexOrder::Lexicographic,
        );
        let parts = vec![vec!["d", "a", "b"], vec!["x", "y"], vec!["c"]];
        let split = component.induced_parts(&parts);

        assert_eq!(split.len(), 3);
        for (part, sub) in parts.iter().zip(&split) {
            let expected = component.induced(part.iter().copied());
            assert_eq!(sub.vertices().collect::<Vec<_>>(), expected.vertices().collect::<Vec<_>>());
            assert_eq!(sub.edges().collect::<Vec<_>>(), expected.edges().collect::<Vec<_>>());
        }
        assert_eq!(split[0].edge_count(), 2);
        assert_eq!(split[2].edge_count(), 0);
    }
}
