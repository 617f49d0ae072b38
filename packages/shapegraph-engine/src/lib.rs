/*
 * Shapegraph Engine - structural classification of knowledge-graph components
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (VertexId, ClassLabel, EdgeSignature)
 * - features/    : Vertical slices (dataset → component_features → canonical_form → similarity)
 * - pipeline/    : Orchestration and reports
 * - config/      : Presets, YAML loading, validation
 */

#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{AnalysisConfig, ConfigError, Preset};
pub use errors::{Result, ShapegraphError};
pub use features::canonical_form::{CanonicalForm, CanonicalFormBuilder, TraversalKind};
pub use features::class_catalog::ClassCatalog;
pub use features::component_features::{Component, ComponentFeatures, ShapeFamily};
pub use features::dataset::{DatasetGraph, Decomposition, NTriplesReader};
pub use features::similarity::{SimilarityBag, SimilarityGrouper};
pub use pipeline::{AnalysisReport, ShapeAnalyzer};
pub use shared::models::{ClassLabel, EdgeSignature, VertexId, VertexOrder};
