//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure data types (no graph library calls)
//! - ports/      - Interface definitions (traits)
//! - infrastructure/ - Algorithms and external dependency implementations

/// Vertex → class / label lookup
pub mod class_catalog;

/// Per-component metrics and shape predicates
pub mod component_features;

/// Class-collapsing canonical forms
pub mod canonical_form;

/// Signature-set similarity bags
pub mod similarity;

/// N-Triples ingestion and decomposition into components
pub mod dataset;
