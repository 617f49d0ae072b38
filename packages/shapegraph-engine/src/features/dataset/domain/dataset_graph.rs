//! Whole-dataset graph
//!
//! A directed multigraph over IRIs and blank nodes, plus the class catalog
//! collected from `rdf:type` and `rdfs:label` statements. Vertices keep the
//! order in which they were first seen, which `VertexOrder::Insertion`
//! preserves downstream.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::Decomposition;
use crate::features::class_catalog::{ClassCatalog, ClassCatalogBuilder};
use crate::features::component_features::{Component, ComponentFeatures};
use crate::shared::models::{VertexId, VertexOrder};

#[derive(Debug, Clone)]
pub struct DatasetGraph {
    vertices: Vec<VertexId>,
    edges: Vec<(VertexId, VertexId)>,
    catalog: Arc<ClassCatalog>,
}

impl DatasetGraph {
    pub fn builder() -> DatasetGraphBuilder {
        DatasetGraphBuilder::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    pub fn catalog(&self) -> &Arc<ClassCatalog> {
        &self.catalog
    }

    pub fn to_component(&self, order: VertexOrder) -> Component {
        Component::new(
            self.vertices.iter().cloned(),
            self.edges.iter().map(|(s, t)| (s.as_str(), t.as_str())),
            order,
        )
    }

    /// Features over the entire dataset graph
    pub fn features(&self, order: VertexOrder) -> ComponentFeatures {
        ComponentFeatures::new(self.to_component(order), Arc::clone(&self.catalog))
    }

    /// Cut the graph into components, ascending by vertex count
    pub fn decompose(&self, decomposition: Decomposition, order: VertexOrder) -> Vec<ComponentFeatures> {
        let whole = self.features(order);
        let partition = match decomposition {
            Decomposition::Weak => whole.connected_sets(),
            Decomposition::Strong => whole.strongly_connected_sets(),
        };
        debug!(
            %decomposition,
            vertices = whole.vertex_count(),
            parts = partition.len(),
            "decomposed dataset graph"
        );
        whole.create_subgraph_features(&partition)
    }
}

/// Incremental construction, one statement at a time
#[derive(Debug, Default)]
pub struct DatasetGraphBuilder {
    vertices: Vec<VertexId>,
    seen: HashSet<VertexId>,
    edges: Vec<(VertexId, VertexId)>,
    catalog: ClassCatalogBuilder,
}

impl DatasetGraphBuilder {
    /// Register a vertex; repeated calls keep the first position
    pub fn add_vertex(&mut self, vertex: &str) {
        if !self.seen.contains(vertex) {
            self.seen.insert(vertex.to_string());
            self.vertices.push(vertex.to_string());
        }
    }

    pub fn add_edge(&mut self, source: &str, target: &str) {
        self.add_vertex(source);
        self.add_vertex(target);
        self.edges.push((source.to_string(), target.to_string()));
    }

    /// Returns false when `vertex` already had a class
    pub fn add_class(&mut self, vertex: &str, class: &str) -> bool {
        self.add_vertex(vertex);
        self.catalog.add_class(vertex, class)
    }

    /// Returns false when `vertex` already had a label
    pub fn add_label(&mut self, vertex: &str, label: &str) -> bool {
        self.add_vertex(vertex);
        self.catalog.add_label(vertex, label)
    }

    pub fn build(self) -> DatasetGraph {
        DatasetGraph {
            vertices: self.vertices,
            edges: self.edges,
            catalog: Arc::new(self.catalog.build()),
        }
    }
}
