//! Shared module - Common types used across all features
//!
//! Holds the vocabulary every feature speaks: vertex identifiers, class
//! labels, edge signatures and the vertex ordering policy.

pub mod models;

// Re-exports for convenience
pub use models::*;
