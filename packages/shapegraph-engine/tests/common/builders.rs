//! Test data builders

use shapegraph_engine::features::class_catalog::{ClassCatalog, ClassCatalogBuilder};
use shapegraph_engine::features::component_features::{Component, ComponentFeatures};
use shapegraph_engine::shared::models::VertexOrder;
use std::sync::Arc;

/// Builder for a single classified component
#[derive(Debug, Default)]
pub struct ComponentBuilder {
    vertices: Vec<String>,
    edges: Vec<(String, String)>,
    catalog: ClassCatalogBuilder,
    order: VertexOrder,
}

impl ComponentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge(mut self, source: &str, target: &str) -> Self {
        self.edges.push((source.to_string(), target.to_string()));
        self
    }

    pub fn with_edges(mut self, edges: &[(&str, &str)]) -> Self {
        for (source, target) in edges {
            self = self.with_edge(source, target);
        }
        self
    }

    /// Vertex without edges
    pub fn with_vertex(mut self, vertex: &str) -> Self {
        self.vertices.push(vertex.to_string());
        self
    }

    pub fn with_class(mut self, vertex: &str, class: &str) -> Self {
        self.catalog.add_class(vertex, class);
        self
    }

    pub fn with_order(mut self, order: VertexOrder) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> ComponentFeatures {
        let mut vertices = self.vertices;
        for (source, target) in &self.edges {
            vertices.push(source.clone());
            vertices.push(target.clone());
        }
        let component = Component::new(vertices, self.edges, self.order);
        ComponentFeatures::new(component, Arc::new(self.catalog.build()))
    }
}

/// Features over a directed path `v0 -> v1 -> ... -> v{n-1}`
pub fn path_features(n: usize) -> ComponentFeatures {
    let names: Vec<String> = (0..n).map(|i| format!("v{i:03}")).collect();
    let mut builder = ComponentBuilder::new().with_vertex(&names[0]);
    for pair in names.windows(2) {
        builder = builder.with_edge(&pair[0], &pair[1]);
    }
    builder.build()
}

/// Hub with `n` outgoing edges to leaves of one class
pub fn star_features(n: usize, leaf_class: &str) -> ComponentFeatures {
    let mut builder = ComponentBuilder::new().with_class("hub", "Hub");
    for i in 0..n {
        let leaf = format!("leaf{i}");
        builder = builder.with_edge("hub", &leaf).with_class(&leaf, leaf_class);
    }
    builder.build()
}

pub fn empty_catalog() -> Arc<ClassCatalog> {
    Arc::new(ClassCatalog::new())
}
