//! Component Features
//!
//! Structural features and shape classification of connected components.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! infrastructure/features.rs (ComponentFeatures)
//!           ↓ asks
//! ports/ (ConnectivityOracle, ShortestPathOracle, ChromaticHeuristic, CycleDetector)
//!           ↑ implemented by
//! infrastructure/petgraph_oracles.rs
//!
//! domain/ (Component snapshot, degrees, flags, measurements, documents)
//! ```
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use shapegraph_engine::features::class_catalog::ClassCatalog;
//! use shapegraph_engine::features::component_features::{Component, ComponentFeatures};
//! use shapegraph_engine::shared::models::VertexOrder;
//!
//! let component = Component::from_edges([("hub", "a"), ("hub", "b"), ("hub", "c")], VertexOrder::Lexicographic);
//! let features = ComponentFeatures::new(component, Arc::new(ClassCatalog::new()));
//!
//! assert!(features.is_outbound_star_graph());
//! assert!(!features.is_path_graph());
//! ```

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export domain types
pub use domain::{
    Component, ComponentDocument, DegreeKind, DegreeStats, DocumentEdge, DocumentVertex,
    GraphView, Measurement, ShapeFamily, ShapeFlags, VertexDegree,
};

pub use infrastructure::{ComponentFeatures, PetgraphOracles};
pub use ports::{
    ChromaticHeuristic, ConnectivityOracle, CycleDetector, GraphOracles, ShortestPathOracle,
};
