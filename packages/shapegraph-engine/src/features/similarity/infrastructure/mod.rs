//! Similarity Infrastructure

pub mod grouper;

pub use grouper::{BagRendering, SimilarityGrouper, DEFAULT_MAX_VERTICES};
