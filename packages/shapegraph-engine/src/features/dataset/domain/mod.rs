//! Dataset Domain

pub mod dataset_graph;
pub mod decomposition;

pub use dataset_graph::{DatasetGraph, DatasetGraphBuilder};
pub use decomposition::Decomposition;
