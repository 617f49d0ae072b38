//! Serializable rendering of a component

use serde::Serialize;

use crate::shared::models::ClassLabel;

/// Vertex annotated with its class and human label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentVertex {
    pub id: String,
    pub class: ClassLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEdge {
    pub source: String,
    pub target: String,
}

/// One component as vertex and edge lists, ready for a JSON or graph
/// exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDocument {
    pub vertices: Vec<DocumentVertex>,
    pub edges: Vec<DocumentEdge>,
}
