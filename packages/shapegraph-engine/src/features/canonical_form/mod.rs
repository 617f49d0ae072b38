//! Canonical Form
//!
//! Deterministic, size-reduced representative of a component's shape, used
//! as a dedup key and as a compact preview.
//!
//! ```text
//! ComponentFeatures ──(CanonicalFormBuilder, TraversalKind)──▶ CanonicalForm
//!                                                               ├─ shape_key()
//!                                                               ├─ renumbering()
//!                                                               └─ to_dot() / to_document()
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{
    CanonicalEdge, CanonicalForm, CanonicalFormDocument, CanonicalVertex, IncidentEdge,
    TraversalKind,
};
pub use infrastructure::CanonicalFormBuilder;
