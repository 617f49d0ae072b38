//! Canonical (minimized) form of a component
//!
//! A small undirected graph over synthetic sequential vertex ids, each
//! tagged with the class of the vertex it stands for. Original identifiers
//! survive only in the renumbering table.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::fmt;

use crate::shared::models::{ClassLabel, VertexId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalVertex {
    pub id: usize,
    pub class: ClassLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalEdge {
    pub source: usize,
    pub target: usize,
}

/// Serializable view of a canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalFormDocument {
    pub shape_key: String,
    pub vertices: Vec<CanonicalVertex>,
    pub edges: Vec<CanonicalEdge>,
    pub collapsed_leaves: usize,
}

/// Payload-free edge weight (renders as an empty label)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Link;

impl fmt::Display for Link {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CanonicalForm {
    graph: UnGraph<ClassLabel, Link>,
    origins: Vec<Option<VertexId>>,
    collapsed: usize,
}

impl CanonicalForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its synthetic id
    pub(crate) fn add_vertex(&mut self, class: ClassLabel, origin: Option<VertexId>) -> usize {
        self.origins.push(origin);
        self.graph.add_node(class).index()
    }

    pub(crate) fn add_edge(&mut self, source: usize, target: usize) {
        self.graph
            .add_edge(NodeIndex::new(source), NodeIndex::new(target), Link);
    }

    pub(crate) fn record_collapsed(&mut self) {
        self.collapsed += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Leaves dropped because an identical sibling already represents them
    pub fn collapsed_count(&self) -> usize {
        self.collapsed
    }

    pub fn class_of(&self, id: usize) -> Option<&ClassLabel> {
        self.graph.node_weight(NodeIndex::new(id))
    }

    pub fn vertices(&self) -> Vec<CanonicalVertex> {
        self.graph
            .node_indices()
            .map(|node| CanonicalVertex {
                id: node.index(),
                class: self.graph[node].clone(),
            })
            .collect()
    }

    /// Edges in emission order
    pub fn edges(&self) -> Vec<CanonicalEdge> {
        self.graph
            .edge_references()
            .map(|edge| CanonicalEdge {
                source: edge.source().index(),
                target: edge.target().index(),
            })
            .collect()
    }

    /// (source class, target class) of every edge, in emission order
    pub fn class_pairs(&self) -> Vec<(&ClassLabel, &ClassLabel)> {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
            .collect()
    }

    /// Original vertex → synthetic id, in synthetic order
    pub fn renumbering(&self) -> Vec<(&str, usize)> {
        self.origins
            .iter()
            .enumerate()
            .filter_map(|(id, origin)| origin.as_deref().map(|vertex| (vertex, id)))
            .collect()
    }

    pub fn synthetic_id(&self, vertex: &str) -> Option<usize> {
        self.origins
            .iter()
            .position(|origin| origin.as_deref() == Some(vertex))
    }

    /// Deterministic textual key: vertex classes by id, then the sorted
    /// edge list. Equal forms have equal keys.
    pub fn shape_key(&self) -> String {
        let classes: Vec<&str> = self
            .graph
            .node_weights()
            .map(ClassLabel::as_str)
            .collect();
        let mut edges: Vec<(usize, usize)> = self
            .graph
            .edge_references()
            .map(|edge| {
                let (a, b) = (edge.source().index(), edge.target().index());
                (a.min(b), a.max(b))
            })
            .collect();
        edges.sort_unstable();
        let edges: Vec<String> = edges.iter().map(|(a, b)| format!("{}-{}", a, b)).collect();
        format!("{}|{}", classes.join(","), edges.join(","))
    }

    /// Graphviz rendering, vertices labelled with their class
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }

    pub fn to_document(&self) -> CanonicalFormDocument {
        CanonicalFormDocument {
            shape_key: self.shape_key(),
            vertices: self.vertices(),
            edges: self.edges(),
            collapsed_leaves: self.collapsed,
        }
    }
}
