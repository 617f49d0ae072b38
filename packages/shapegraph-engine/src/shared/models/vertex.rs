//! Vertex identifiers and ordering policy

use serde::{Deserialize, Serialize};

/// Opaque vertex identifier (an IRI or blank node label)
pub type VertexId = String;

/// Total order applied to the vertices of a component at construction time.
///
/// Every traversal in the engine (diameter path search, DFS pruning,
/// canonical BFS, greedy colouring) iterates vertices in this order, so
/// pinning it pins every tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexOrder {
    /// Sort vertices (and edges by endpoint position) by identifier
    #[default]
    Lexicographic,

    /// Keep the order in which the caller supplied vertices and edges.
    ///
    /// Results are only reproducible if the caller's order is.
    Insertion,
}

impl VertexOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexOrder::Lexicographic => "lexicographic",
            VertexOrder::Insertion => "insertion",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lexicographic" | "lex" => Some(VertexOrder::Lexicographic),
            "insertion" => Some(VertexOrder::Insertion),
            _ => None,
        }
    }
}
