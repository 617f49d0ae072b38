//! Dataset Ingestion
//!
//! Reads RDF N-Triples into a whole-dataset graph and cuts it into the
//! components every other feature works on.
//!
//! # Example
//! ```
//! use shapegraph_engine::features::dataset::{Decomposition, NTriplesReader};
//! use shapegraph_engine::shared::models::VertexOrder;
//!
//! let graph = NTriplesReader::new()
//!     .read_str("<http://ex/a> <http://ex/p> <http://ex/b> .\n")
//!     .unwrap();
//! let components = graph.decompose(Decomposition::Weak, VertexOrder::Lexicographic);
//! assert_eq!(components.len(), 1);
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{DatasetGraph, DatasetGraphBuilder, Decomposition};
pub use infrastructure::NTriplesReader;
pub use oxrdf::vocab;
