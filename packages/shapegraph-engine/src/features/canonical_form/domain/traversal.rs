//! Traversal strategy
//!
//! Chosen once per builder; the rest of the traversal only ever asks for
//! "the edges incident to this vertex".

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::features::component_features::domain::Component;

/// Edge seen from the vertex being expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncidentEdge {
    pub edge: EdgeIndex,
    pub neighbor: NodeIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Follow outgoing edges only
    #[default]
    Directed,
    /// Follow every incident edge, whatever its direction
    Undirected,
}

impl TraversalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalKind::Directed => "directed",
            TraversalKind::Undirected => "undirected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "directed" => Some(TraversalKind::Directed),
            "undirected" => Some(TraversalKind::Undirected),
            _ => None,
        }
    }

    /// Edges incident to `node` for this traversal, ordered by neighbour
    /// position and then edge index.
    pub fn incident_edges(&self, component: &Component, node: NodeIndex) -> Vec<IncidentEdge> {
        let graph = component.directed();
        let mut incident: Vec<IncidentEdge> = graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| IncidentEdge {
                edge: edge.id(),
                neighbor: edge.target(),
            })
            .collect();

        if *self == TraversalKind::Undirected {
            incident.extend(
                graph
                    .edges_directed(node, Direction::Incoming)
                    // a self-loop was already listed as outgoing
                    .filter(|edge| edge.source() != node)
                    .map(|edge| IncidentEdge {
                        edge: edge.id(),
                        neighbor: edge.source(),
                    }),
            );
        }

        incident.sort_by_key(|incident| (incident.neighbor, incident.edge));
        incident
    }
}
